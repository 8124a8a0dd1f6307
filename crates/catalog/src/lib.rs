//! # Catalog Crate
//!
//! This crate owns the fixed movie catalog that recommendations are scored
//! against.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Genre, Catalog, CatalogProvider)
//! - **builtin**: The compiled-in ten-movie catalog
//! - **parser**: Parse user-typed genre tags
//! - **index**: Build and validate a catalog, lookup indices, title search
//! - **error**: Error types for catalog validation and parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, CatalogProvider, Genre};
//!
//! let catalog = Catalog::builtin();
//!
//! for movie in catalog.list_movies() {
//!     println!("{} ({}) [{}]", movie.title, movie.year, movie.genre_list());
//! }
//!
//! let sci_fi = catalog.get_movies_by_genre(Genre::SciFi);
//! let matrix = catalog.resolve("the matrix").unwrap();
//! ```

// Public modules
pub mod builtin;
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::{parse_genre, parse_genre_list};
pub use types::{Catalog, CatalogProvider, Genre, Movie, MovieId};
