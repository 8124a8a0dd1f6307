//! Error types for the catalog crate.
//!
//! The compiled-in catalog never produces these; they surface when a caller
//! builds a catalog from its own movie list or parses user-typed genre tags.

use thiserror::Error;

/// Errors raised while parsing genre tags or validating a movie list
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// A genre tag that doesn't name any known genre
    #[error("Unknown genre: {value}")]
    UnknownGenre { value: String },

    /// Two movies share the same id
    #[error("Duplicate movie id: {id}")]
    DuplicateId { id: String },

    /// Two movies share the same title (compared case-insensitively)
    #[error("Duplicate movie title: {title}")]
    DuplicateTitle { title: String },

    /// A movie has no genres at all
    #[error("Movie {id} has no genres")]
    EmptyGenres { id: String },

    /// A movie field holds a value outside its allowed range
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
