//! Build a ScoringContext from a UserProfile.
//!
//! The context gathers what the components need once per recommendation pass
//! (age and a genre set for O(1) membership checks) instead of re-reading the
//! profile for every movie.

use catalog::Genre;
use profile::UserProfile;
use std::collections::HashSet;

/// Per-pass view of the user used by every score component
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringContext {
    pub age: u32,
    pub preferred_genres: HashSet<Genre>,
}

impl ScoringContext {
    pub fn new(age: u32, preferred_genres: impl IntoIterator<Item = Genre>) -> Self {
        Self {
            age,
            preferred_genres: preferred_genres.into_iter().collect(),
        }
    }

    pub fn from_profile(profile: &UserProfile) -> Self {
        Self::new(profile.age, profile.genres.iter().copied())
    }

    pub fn prefers(&self, genre: Genre) -> bool {
        self.preferred_genres.contains(&genre)
    }
}
