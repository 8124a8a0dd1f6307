//! # Profile Crate
//!
//! Everything about the single local user: registering, the watched list,
//! and persisting the profile between runs.
//!
//! ## Components
//!
//! ### Registration
//! Validates the raw form (name, email with `@`, age >= 13, password of at
//! least 6 characters), keeps the genre tags it recognizes and hashes the
//! password with Argon2.
//!
//! ### Watched list
//! `UserProfile::mark_watched` appends a title once; repeats are no-ops.
//!
//! ### Profile store
//! One JSON object at a fixed path. Missing or unreadable files mean
//! "nobody registered yet"; `clear` is logout.
//!
//! ## Example Usage
//!
//! ```ignore
//! use profile::{ProfileStore, RegistrationForm, UserProfile};
//!
//! let store = ProfileStore::default();
//! let profile = match store.load_or_none() {
//!     Some(profile) => profile,
//!     None => {
//!         let profile = UserProfile::register(form, today)?;
//!         store.save(&profile)?;
//!         profile
//!     }
//! };
//! ```

// Public modules
pub mod error;
pub mod password;
pub mod registration;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{ProfileError, Result, ValidationError};
pub use registration::{MIN_AGE, MIN_PASSWORD_LEN};
pub use store::{DEFAULT_STORE_FILE, ProfileStore};
pub use types::{RegistrationForm, UserProfile};
