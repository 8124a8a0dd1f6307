//! The local user's profile and the raw registration form.

use catalog::Genre;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The single local user's registration data and watched list.
///
/// `watched_movies` is private so every append goes through `mark_watched`,
/// which keeps the list free of duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub age: u32,
    /// Preferred genres, in the order the user typed them
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub bio: String,
    /// Argon2 PHC string; the plaintext is never stored
    pub password_hash: String,
    #[serde(default)]
    watched_movies: Vec<String>,
    pub registration_date: NaiveDate,
}

impl UserProfile {
    /// Assemble a profile from already-validated parts.
    ///
    /// No checks run here: the age minimum, the name/email rules and password
    /// hashing are only enforced by `UserProfile::register`, the one validated
    /// entry point. Use this for profiles built from trusted data.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
        genres: Vec<Genre>,
        password_hash: impl Into<String>,
        registration_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
            genres,
            bio: String::new(),
            password_hash: password_hash.into(),
            watched_movies: Vec::new(),
            registration_date,
        }
    }

    /// Set the free-text bio (builder pattern)
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// Titles the user has marked watched, oldest first
    pub fn watched_movies(&self) -> &[String] {
        &self.watched_movies
    }

    pub fn has_watched(&self, title: &str) -> bool {
        self.watched_movies.iter().any(|t| t == title)
    }

    /// Append `title` to the watched list unless it is already there.
    ///
    /// Returns `true` when the list changed.
    pub fn mark_watched(&mut self, title: &str) -> bool {
        if self.has_watched(title) {
            return false;
        }
        self.watched_movies.push(title.to_string());
        true
    }

    pub fn prefers(&self, genre: Genre) -> bool {
        self.genres.contains(&genre)
    }

    /// Bio for display, "N/A" when blank
    pub fn bio_or_placeholder(&self) -> &str {
        if self.bio.trim().is_empty() {
            "N/A"
        } else {
            &self.bio
        }
    }

    /// Drop repeated watched entries, keeping first occurrences.
    ///
    /// Only needed for hand-edited store files.
    pub(crate) fn dedup_watched(&mut self) {
        let mut seen = Vec::with_capacity(self.watched_movies.len());
        self.watched_movies.retain(|title| {
            if seen.contains(title) {
                false
            } else {
                seen.push(title.clone());
                true
            }
        });
    }
}

/// Raw registration input, exactly as typed.
///
/// `genres` is the comma-separated text field ("Sci-Fi, Action").
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub age: u32,
    pub genres: String,
    pub bio: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile::new(
            "Ada",
            "ada@example.com",
            30,
            vec![Genre::SciFi, Genre::Drama],
            "$argon2id$stub",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
    }

    #[test]
    fn test_mark_watched_is_idempotent() {
        let mut profile = sample_profile();

        assert!(profile.mark_watched("Inception"));
        assert!(!profile.mark_watched("Inception"));

        assert_eq!(profile.watched_movies(), &["Inception".to_string()]);
    }

    #[test]
    fn test_mark_watched_keeps_order() {
        let mut profile = sample_profile();
        profile.mark_watched("The Matrix");
        profile.mark_watched("Goodfellas");
        profile.mark_watched("The Matrix");

        assert_eq!(profile.watched_movies(), &["The Matrix", "Goodfellas"]);
    }

    #[test]
    fn test_bio_placeholder() {
        let profile = sample_profile();
        assert_eq!(profile.bio_or_placeholder(), "N/A");

        let profile = profile.with_bio("Loves long movies");
        assert_eq!(profile.bio_or_placeholder(), "Loves long movies");
    }

    #[test]
    fn test_dedup_watched() {
        let json = r#"{
            "name": "Ada",
            "email": "ada@example.com",
            "age": 30,
            "genres": ["Sci-Fi"],
            "password_hash": "x",
            "watched_movies": ["Heat", "Alien", "Heat"],
            "registration_date": "2024-05-01"
        }"#;
        let mut profile: UserProfile = serde_json::from_str(json).unwrap();
        profile.dedup_watched();

        assert_eq!(profile.watched_movies(), &["Heat", "Alien"]);
        assert_eq!(profile.bio, "");
    }

    #[test]
    fn test_prefers() {
        let profile = sample_profile();
        assert!(profile.prefers(Genre::Drama));
        assert!(!profile.prefers(Genre::Horror));
    }

    #[test]
    fn test_new_does_not_validate() {
        // Only `register` enforces the registration rules
        let child = UserProfile::new(
            "",
            "no-at-sign",
            9,
            vec![],
            "hash",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        assert_eq!(child.age, 9);
    }
}
