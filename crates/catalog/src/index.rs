//! Catalog building and indexing logic.
//!
//! Builds a `Catalog` from a list of movies:
//! - Validate each movie (genres, rating range, duration)
//! - Reject duplicate ids and titles
//! - Build primary indices (id, title) and secondary indices (genre, year)

use crate::error::{CatalogError, Result};
use crate::parser::normalize_title;
use crate::types::*;

impl Catalog {
    /// Build a catalog from an ordered movie list.
    ///
    /// Catalog order is the order of `movies`; it is what the recommendation
    /// engine falls back to when two movies score the same.
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut catalog = Catalog::new();

        for movie in movies {
            validate_movie(&movie)?;

            if catalog.id_index.contains_key(&movie.id) {
                return Err(CatalogError::DuplicateId { id: movie.id });
            }
            if catalog
                .title_index
                .contains_key(&normalize_title(&movie.title))
            {
                return Err(CatalogError::DuplicateTitle { title: movie.title });
            }

            catalog.insert_movie(movie);
        }

        catalog.build_secondary_indices();
        Ok(catalog)
    }

    /// Rebuild the genre and year indices from the current movie list
    pub(crate) fn build_secondary_indices(&mut self) {
        self.genre_index.clear();
        self.year_index.clear();

        for (pos, movie) in self.movies.iter().enumerate() {
            for &genre in &movie.genres {
                self.genre_index.entry(genre).or_default().push(pos);
            }
            self.year_index.entry(movie.year).or_default().push(pos);
        }
    }

    /// Case-insensitive title search.
    ///
    /// Exact title matches come first, then substring matches; within each
    /// group higher-rated movies come first. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Movie> {
        let needle = normalize_title(query);
        if needle.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(u8, &Movie)> = self
            .movies
            .iter()
            .filter_map(|movie| {
                let title = normalize_title(&movie.title);
                if title == needle {
                    Some((0, movie))
                } else if title.contains(&needle) {
                    Some((1, movie))
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            a.0.cmp(&b.0).then_with(|| {
                b.1.rating
                    .partial_cmp(&a.1.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        });

        matches.into_iter().map(|(_, movie)| movie).collect()
    }
}

/// Check a single movie's fields
fn validate_movie(movie: &Movie) -> Result<()> {
    if movie.id.trim().is_empty() {
        return Err(CatalogError::InvalidValue {
            field: "id".to_string(),
            value: movie.id.clone(),
        });
    }
    if movie.title.trim().is_empty() {
        return Err(CatalogError::InvalidValue {
            field: "title".to_string(),
            value: movie.title.clone(),
        });
    }
    if movie.genres.is_empty() {
        return Err(CatalogError::EmptyGenres {
            id: movie.id.clone(),
        });
    }
    if !(0.0..=10.0).contains(&movie.rating) {
        return Err(CatalogError::InvalidValue {
            field: "rating".to_string(),
            value: movie.rating.to_string(),
        });
    }
    if movie.duration == 0 {
        return Err(CatalogError::InvalidValue {
            field: "duration".to_string(),
            value: movie.duration.to_string(),
        });
    }
    Ok(())
}
