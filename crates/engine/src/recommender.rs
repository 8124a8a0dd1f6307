//! Rank the catalog for a user.
//!
//! ## Algorithm
//! 1. Build a ScoringContext from the profile
//! 2. Score every movie's deterministic base in parallel
//! 3. Draw jitter for each movie, sequentially in catalog order
//! 4. Clamp into [0, 100] and floor to the match score
//! 5. Stable-sort by match score DESC (ties keep catalog order)
//! 6. Keep the first `top_n`

use crate::breakdown::ScoreBreakdown;
use crate::context::ScoringContext;
use crate::scoring_pipeline::ScoringPipeline;
use catalog::Movie;
use profile::UserProfile;
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, instrument};

/// How many recommendations a pass returns unless told otherwise
pub const DEFAULT_TOP_N: usize = 5;

/// Inclusive range the per-movie random jitter is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JitterRange {
    min: u32,
    max: u32,
}

impl JitterRange {
    /// 0..=20, drawn uniformly
    pub const DEFAULT: JitterRange = JitterRange { min: 0, max: 20 };

    /// Bounds are reordered if given backwards
    pub fn new(min: u32, max: u32) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Always the same value; `fixed(0)` disables jitter
    pub fn fixed(value: u32) -> Self {
        Self::new(value, value)
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.min..=self.max)
    }
}

impl Default for JitterRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A movie paired with the score it earned in one recommendation pass
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMovie {
    pub movie: Movie,
    pub match_score: u8,
    pub breakdown: ScoreBreakdown,
}

/// Scores and ranks catalog movies for a profile.
///
/// Stateless between calls: every `recommend` redraws all jitter, so two
/// passes over the same inputs usually differ.
#[derive(Debug)]
pub struct Recommender {
    pipeline: ScoringPipeline,
    jitter: JitterRange,
}

impl Recommender {
    pub fn new(pipeline: ScoringPipeline) -> Self {
        Self {
            pipeline,
            jitter: JitterRange::DEFAULT,
        }
    }

    /// Standard pipeline with the default 0..=20 jitter
    pub fn standard() -> Self {
        Self::new(ScoringPipeline::standard())
    }

    pub fn with_jitter(mut self, jitter: JitterRange) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn jitter(&self) -> JitterRange {
        self.jitter
    }

    pub fn pipeline(&self) -> &ScoringPipeline {
        &self.pipeline
    }

    /// Rank `catalog` for `profile` and return at most `top_n` movies.
    ///
    /// Never fails and never mutates the catalog; the only side effect is
    /// consuming randomness from `rng`.
    #[instrument(skip(self, profile, catalog, rng), fields(catalog_size = catalog.len()))]
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        catalog: &[Movie],
        top_n: usize,
        rng: &mut R,
    ) -> Vec<ScoredMovie> {
        let context = ScoringContext::from_profile(profile);

        let bases: Vec<ScoreBreakdown> = catalog
            .par_iter()
            .map(|movie| self.pipeline.score(movie, &context))
            .collect();

        // Jitter is drawn in catalog order so a seeded rng reproduces a pass
        let mut scored: Vec<ScoredMovie> = catalog
            .iter()
            .zip(bases)
            .map(|(movie, base)| {
                let breakdown = base.with_jitter(self.jitter.draw(&mut *rng));
                ScoredMovie {
                    movie: movie.clone(),
                    match_score: breakdown.match_score,
                    breakdown,
                }
            })
            .collect();

        // sort_by is stable, which gives the catalog-order tie-break
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        scored.truncate(top_n);

        debug!(
            "Ranked {} movies for {}, returning {}",
            catalog.len(),
            profile.name,
            scored.len()
        );
        scored
    }

    /// The non-random floor of `movie`'s raw score for `profile`
    pub fn score_floor(&self, profile: &UserProfile, movie: &Movie) -> f32 {
        let context = ScoringContext::from_profile(profile);
        self.pipeline.score(movie, &context).base
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::RatingWeight;
    use catalog::{Catalog, CatalogProvider, Genre};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn profile(age: u32, genres: Vec<Genre>) -> UserProfile {
        UserProfile::new(
            "Tester",
            "tester@example.com",
            age,
            genres,
            "hash",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_default_top_n() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        let recs = Recommender::standard().recommend(
            &profile(25, vec![Genre::Drama]),
            catalog.list_movies(),
            DEFAULT_TOP_N,
            &mut rng,
        );
        assert_eq!(recs.len(), 5);
    }

    #[test]
    fn test_top_n_larger_than_catalog() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);

        let recs = Recommender::standard().recommend(
            &profile(25, vec![]),
            catalog.list_movies(),
            50,
            &mut rng,
        );
        assert_eq!(recs.len(), 10);
    }

    #[test]
    fn test_top_n_zero_and_empty_catalog() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let recommender = Recommender::standard();
        let user = profile(25, vec![]);

        assert!(recommender.recommend(&user, catalog.list_movies(), 0, &mut rng).is_empty());
        assert!(recommender.recommend(&user, &[], 5, &mut rng).is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let flat = Recommender::new(ScoringPipeline::new()).with_jitter(JitterRange::fixed(0));

        let recs = flat.recommend(&profile(30, vec![]), catalog.list_movies(), 10, &mut rng);

        let expected: Vec<&str> = catalog.list_movies().iter().map(|m| m.id.as_str()).collect();
        let actual: Vec<&str> = recs.iter().map(|r| r.movie.id.as_str()).collect();
        assert_eq!(actual, expected);
        assert!(recs.iter().all(|r| r.match_score == 0));
    }

    #[test]
    fn test_rating_only_ranking_breaks_ties_by_catalog_order() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let rating_only = Recommender::new(ScoringPipeline::new().add_component(RatingWeight::default()))
            .with_jitter(JitterRange::fixed(0));

        let recs = rating_only.recommend(&profile(30, vec![]), catalog.list_movies(), 10, &mut rng);
        let titles: Vec<&str> = recs.iter().map(|r| r.movie.title.as_str()).collect();

        // 18: Shawshank (18.6), Dark Knight (18.0); everything else floors to 17
        assert_eq!(
            titles,
            vec![
                "The Shawshank Redemption",
                "The Dark Knight",
                "Inception",
                "Pulp Fiction",
                "Fight Club",
                "Forrest Gump",
                "The Matrix",
                "Goodfellas",
                "The Silence of the Lambs",
                "Interstellar",
            ]
        );
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let catalog = Catalog::builtin();
        let user = profile(22, vec![Genre::Crime]);
        let recommender = Recommender::standard();

        let first = recommender.recommend(&user, catalog.list_movies(), 5, &mut StdRng::seed_from_u64(99));
        let second = recommender.recommend(&user, catalog.list_movies(), 5, &mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        let recommender = Recommender::standard();

        for _ in 0..50 {
            for rec in recommender.recommend(&profile(30, vec![]), catalog.list_movies(), 10, &mut rng) {
                assert!(rec.breakdown.jitter <= 20);
            }
        }
    }

    #[test]
    fn test_jitter_range_new_orders_bounds() {
        let range = JitterRange::new(9, 4);
        assert_eq!((range.min(), range.max()), (4, 9));

        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(JitterRange::fixed(6).draw(&mut rng), 6);
    }

    #[test]
    fn test_score_floor() {
        let catalog = Catalog::builtin();
        let inception = catalog.find_by_title("Inception").unwrap();
        let user = profile(20, vec![Genre::SciFi, Genre::Action]);

        let floor = Recommender::standard().score_floor(&user, inception);
        assert!((floor - 77.6).abs() < 1e-4);
    }

    #[test]
    fn test_recommend_does_not_touch_catalog() {
        let catalog = Catalog::builtin();
        let before = catalog.list_movies().to_vec();
        let mut rng = StdRng::seed_from_u64(11);

        Recommender::standard().recommend(&profile(15, vec![Genre::Drama]), catalog.list_movies(), 5, &mut rng);
        assert_eq!(catalog.list_movies(), before.as_slice());
    }
}
