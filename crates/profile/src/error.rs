//! Error types for the profile crate.

use thiserror::Error;

/// Why a registration form was rejected.
///
/// The messages are shown to the user as-is, so they read as instructions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid name or email.")]
    InvalidNameOrEmail,

    #[error("Age must be at least {minimum} (got {age}).")]
    TooYoung { age: u32, minimum: u32 },

    #[error("Password must be at least {minimum} characters.")]
    PasswordTooShort { minimum: usize },
}

/// Errors raised while registering, hashing or persisting a profile
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Invalid registration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    #[error("Profile store I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Profile store holds malformed JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ProfileError>;
