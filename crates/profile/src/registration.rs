//! Registration: turn a raw form into a validated `UserProfile`.
//!
//! Checks run in a fixed order (name/email, age, password) and the first
//! failure wins, so the user sees one message at a time. Genre tags never
//! fail registration: tags outside the catalog's genres are dropped.

use crate::error::{Result, ValidationError};
use crate::password;
use crate::types::{RegistrationForm, UserProfile};
use catalog::{Genre, parse_genre};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Youngest age allowed to register
pub const MIN_AGE: u32 = 13;

/// Shortest accepted password, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

impl RegistrationForm {
    /// Validate every field and return the recognized genres.
    ///
    /// Unrecognized tags are logged and skipped; no movie carries them, so
    /// they could never add points anyway.
    pub fn validate(&self) -> std::result::Result<Vec<Genre>, ValidationError> {
        let email = self.email.trim();
        if self.name.trim().is_empty() || email.is_empty() || !email.contains('@') {
            return Err(ValidationError::InvalidNameOrEmail);
        }
        if self.age < MIN_AGE {
            return Err(ValidationError::TooYoung {
                age: self.age,
                minimum: MIN_AGE,
            });
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                minimum: MIN_PASSWORD_LEN,
            });
        }
        Ok(known_genres(&self.genres))
    }
}

/// Comma-separated tags to genres, skipping blanks, repeats and unknown tags
fn known_genres(tags: &str) -> Vec<Genre> {
    let mut genres = Vec::new();
    for tag in tags.split(',').filter(|t| !t.trim().is_empty()) {
        match parse_genre(tag) {
            Ok(genre) if !genres.contains(&genre) => genres.push(genre),
            Ok(_) => {}
            Err(e) => warn!("Ignoring genre tag: {}", e),
        }
    }
    genres
}

impl UserProfile {
    /// Validate `form`, hash its password and build a fresh profile dated `today`.
    ///
    /// Nothing is persisted here; the caller decides when to save.
    pub fn register(form: RegistrationForm, today: NaiveDate) -> Result<Self> {
        let genres = form.validate()?;
        let password_hash = password::hash_password(&form.password)?;

        debug!(
            "Registered profile for {} with {} preferred genres",
            form.name.trim(),
            genres.len()
        );

        Ok(UserProfile::new(
            form.name.trim(),
            form.email.trim(),
            form.age,
            genres,
            password_hash,
            today,
        )
        .with_bio(form.bio.trim()))
    }

    /// Check a candidate password against the stored hash
    pub fn verify_password(&self, candidate: &str) -> bool {
        password::verify_password(candidate, &self.password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            age: 20,
            genres: "Sci-Fi, Action".to_string(),
            bio: "  Night owl  ".to_string(),
            password: "secret1".to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_register_valid_form() {
        let profile = UserProfile::register(valid_form(), today()).unwrap();

        assert_eq!(profile.name, "Grace");
        assert_eq!(profile.age, 20);
        assert_eq!(profile.genres, vec![Genre::SciFi, Genre::Action]);
        assert_eq!(profile.bio, "Night owl");
        assert_eq!(profile.registration_date, today());
        assert!(profile.watched_movies().is_empty());
    }

    #[test]
    fn test_password_is_hashed() {
        let profile = UserProfile::register(valid_form(), today()).unwrap();

        assert_ne!(profile.password_hash, "secret1");
        assert!(profile.verify_password("secret1"));
        assert!(!profile.verify_password("secret2"));
    }

    #[test]
    fn test_rejects_missing_name_or_bad_email() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidNameOrEmail));

        let mut form = valid_form();
        form.email = "grace.example.com".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidNameOrEmail));

        let mut form = valid_form();
        form.email = String::new();
        assert_eq!(form.validate(), Err(ValidationError::InvalidNameOrEmail));
    }

    #[test]
    fn test_rejects_underage() {
        let mut form = valid_form();
        form.age = 12;
        assert_eq!(
            form.validate(),
            Err(ValidationError::TooYoung { age: 12, minimum: 13 })
        );

        form.age = 13;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_rejects_short_password() {
        let mut form = valid_form();
        form.password = "abc12".to_string();
        assert_eq!(
            form.validate(),
            Err(ValidationError::PasswordTooShort { minimum: 6 })
        );
    }

    #[test]
    fn test_unknown_genre_is_skipped() {
        let mut form = valid_form();
        form.genres = "Sci-Fi, Biography".to_string();

        let profile = UserProfile::register(form, today()).unwrap();
        assert_eq!(profile.genres, vec![Genre::SciFi]);
    }

    #[test]
    fn test_genre_tags_dedup_and_blanks() {
        let mut form = valid_form();
        form.genres = "Drama, , drama, Polka, Crime".to_string();
        assert_eq!(form.validate(), Ok(vec![Genre::Drama, Genre::Crime]));
    }

    #[test]
    fn test_empty_genres_allowed() {
        let mut form = valid_form();
        form.genres = String::new();
        assert_eq!(form.validate(), Ok(vec![]));
    }

    #[test]
    fn test_name_checked_before_age() {
        let mut form = valid_form();
        form.name = String::new();
        form.age = 5;

        let err = UserProfile::register(form, today()).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::Validation(ValidationError::InvalidNameOrEmail)
        ));
    }
}
