//! Benchmarks for the recommendation pass
//!
//! Run with: cargo bench --package engine
//!
//! Scores the built-in catalog, then a synthetic catalog large enough for the
//! parallel base scoring to matter.

use catalog::{Catalog, CatalogProvider, Genre, Movie};
use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use engine::{DEFAULT_TOP_N, Recommender};
use profile::UserProfile;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_profile() -> UserProfile {
    UserProfile::new(
        "Bench",
        "bench@example.com",
        16,
        vec![Genre::SciFi, Genre::Crime, Genre::Drama],
        "hash",
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
}

fn synthetic_catalog(size: usize) -> Vec<Movie> {
    (0..size)
        .map(|i| Movie {
            id: format!("tt{:07}", i),
            title: format!("Movie {}", i),
            genres: vec![Genre::ALL[i % Genre::ALL.len()], Genre::ALL[(i * 7) % Genre::ALL.len()]],
            rating: 5.0 + (i % 50) as f32 / 10.0,
            year: 1950 + (i % 75) as u16,
            duration: 80 + (i % 100) as u16,
        })
        .collect()
}

fn bench_builtin_catalog(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let recommender = Recommender::standard();
    let profile = bench_profile();
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("recommend_builtin", |b| {
        b.iter(|| {
            let recs = recommender.recommend(
                black_box(&profile),
                black_box(catalog.list_movies()),
                DEFAULT_TOP_N,
                &mut rng,
            );
            black_box(recs)
        })
    });
}

fn bench_synthetic_catalog(c: &mut Criterion) {
    let recommender = Recommender::standard();
    let profile = bench_profile();
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("recommend_synthetic");

    for size in [1_000, 10_000, 100_000] {
        let movies = synthetic_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &movies, |b, movies| {
            b.iter(|| {
                let recs = recommender.recommend(black_box(&profile), movies, DEFAULT_TOP_N, &mut rng);
                black_box(recs)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_builtin_catalog, bench_synthetic_catalog);
criterion_main!(benches);
