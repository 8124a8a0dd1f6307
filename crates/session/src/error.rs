//! Error types for the session crate.

use profile::ProfileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No profile registered. Run `cinemate register` first.")]
    NotRegistered,

    #[error("A profile is already registered for {name}. Log out first to start over.")]
    AlreadyRegistered { name: String },

    #[error("No movie in the catalog matches \"{0}\"")]
    UnknownMovie(String),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SessionError>;
