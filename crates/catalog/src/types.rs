//! Core domain types for the movie catalog.
//!
//! This module defines the fundamental data structures shared by every other
//! crate in the workspace: the `Movie` record, the closed `Genre` set, and the
//! `Catalog` that owns the movies and their lookup indices.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque, stable identifier for a movie (the IMDb title id for built-in entries)
pub type MovieId = String;

// =============================================================================
// Movie-related Types
// =============================================================================

/// A single catalog entry. Movies are immutable once placed in a `Catalog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    /// Display name, unique within a catalog
    pub title: String,
    /// Ordered, non-empty list of genres
    pub genres: Vec<Genre>,
    /// Critic score in [0.0, 10.0]
    pub rating: f32,
    /// Release year
    pub year: u16,
    /// Runtime in minutes
    pub duration: u16,
}

impl Movie {
    /// Genres joined for display, e.g. "Sci-Fi, Action"
    pub fn genre_list(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Movie genres.
///
/// Serialized with their conventional spelling so the persisted profile reads
/// naturally (`"Sci-Fi"` rather than `"SciFi"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    #[serde(rename = "Children's")]
    Children,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Fantasy,
    #[serde(rename = "Film-Noir")]
    FilmNoir,
    Horror,
    Musical,
    Mystery,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
    War,
    Western,
}

impl Genre {
    /// Every genre, in declaration order
    pub const ALL: [Genre; 18] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Children,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Fantasy,
        Genre::FilmNoir,
        Genre::Horror,
        Genre::Musical,
        Genre::Mystery,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
        Genre::War,
        Genre::Western,
    ];

    /// Conventional display spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Children => "Children's",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::FilmNoir => "Film-Noir",
            Genre::Horror => "Horror",
            Genre::Musical => "Musical",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
            Genre::War => "War",
            Genre::Western => "Western",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Catalog Provider
// =============================================================================

/// Read-only source of movies for the recommendation engine.
///
/// Implementations must be deterministic: the same provider always lists the
/// same movies in the same order, and listing never fails.
pub trait CatalogProvider {
    fn list_movies(&self) -> &[Movie];
}

// =============================================================================
// Catalog - the in-memory movie table
// =============================================================================

/// Owns the movies (in catalog order) plus indices for fast lookups.
///
/// Index values are positions into `movies`, so every lookup hands back a
/// borrow of the single owned `Movie`.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) movies: Vec<Movie>,

    // Primary indices
    pub(crate) id_index: HashMap<MovieId, usize>,
    /// Keyed by the normalized (trimmed, lowercased) title
    pub(crate) title_index: HashMap<String, usize>,

    // Secondary indices
    pub(crate) genre_index: HashMap<Genre, Vec<usize>>,
    pub(crate) year_index: BTreeMap<u16, Vec<usize>>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            id_index: HashMap::new(),
            title_index: HashMap::new(),
            genre_index: HashMap::new(),
            year_index: BTreeMap::new(),
        }
    }

    /// Get a movie by id
    pub fn get_movie(&self, id: &str) -> Option<&Movie> {
        self.id_index.get(id).map(|&pos| &self.movies[pos])
    }

    /// Get a movie by title, ignoring case and surrounding whitespace
    pub fn find_by_title(&self, title: &str) -> Option<&Movie> {
        self.title_index
            .get(&crate::parser::normalize_title(title))
            .map(|&pos| &self.movies[pos])
    }

    /// Look a movie up by id first, then by title
    pub fn resolve(&self, id_or_title: &str) -> Option<&Movie> {
        self.get_movie(id_or_title.trim())
            .or_else(|| self.find_by_title(id_or_title))
    }

    /// All movies tagged with `genre`, in catalog order
    pub fn get_movies_by_genre(&self, genre: Genre) -> Vec<&Movie> {
        self.genre_index
            .get(&genre)
            .map(|positions| positions.iter().map(|&pos| &self.movies[pos]).collect())
            .unwrap_or_default()
    }

    /// All movies released in `year`, in catalog order
    pub fn get_movies_by_year(&self, year: u16) -> Vec<&Movie> {
        self.year_index
            .get(&year)
            .map(|positions| positions.iter().map(|&pos| &self.movies[pos]).collect())
            .unwrap_or_default()
    }

    /// Insert a movie at the end of the catalog and update the primary indices.
    ///
    /// Secondary indices are rebuilt separately via `build_secondary_indices`.
    pub(crate) fn insert_movie(&mut self, movie: Movie) {
        let pos = self.movies.len();
        self.id_index.insert(movie.id.clone(), pos);
        self.title_index
            .insert(crate::parser::normalize_title(&movie.title), pos);
        self.movies.push(movie);
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl CatalogProvider for Catalog {
    fn list_movies(&self) -> &[Movie] {
        &self.movies
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
