//! # Session
//!
//! The one place that knows who is logged in. A `Session` owns the profile
//! store and the in-memory copy of the current profile, and every change to
//! the profile goes through it so the two never drift apart.

use crate::error::{Result, SessionError};
use catalog::Catalog;
use chrono::{Local, NaiveDate};
use profile::{ProfileStore, RegistrationForm, UserProfile};
use tracing::info;

#[derive(Debug)]
pub struct Session {
    store: ProfileStore,
    profile: Option<UserProfile>,
}

impl Session {
    /// Open the session, picking up a previously registered profile if the
    /// store holds a readable one.
    pub fn open(store: ProfileStore) -> Self {
        let profile = store.load_or_none();
        if let Some(profile) = &profile {
            info!("Welcome back, {}", profile.name);
        }
        Self { store, profile }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_registered(&self) -> bool {
        self.profile.is_some()
    }

    /// The current profile, or `NotRegistered`
    pub fn require_profile(&self) -> Result<&UserProfile> {
        self.profile.as_ref().ok_or(SessionError::NotRegistered)
    }

    /// Validate `form`, persist the new profile and make it current.
    ///
    /// Registration date is today's local date.
    pub fn register(&mut self, form: RegistrationForm) -> Result<&UserProfile> {
        self.register_on(form, Local::now().date_naive())
    }

    /// `register` with an explicit registration date
    pub fn register_on(&mut self, form: RegistrationForm, today: NaiveDate) -> Result<&UserProfile> {
        if let Some(existing) = &self.profile {
            return Err(SessionError::AlreadyRegistered {
                name: existing.name.clone(),
            });
        }

        let profile = UserProfile::register(form, today)?;
        self.store.save(&profile)?;
        info!("Registered {} ({})", profile.name, profile.email);

        Ok(&*self.profile.insert(profile))
    }

    /// Mark a catalog movie watched, by IMDb id or title.
    ///
    /// The catalog's canonical title is what gets stored. Returns `true` if
    /// the watched list changed; the store is only rewritten in that case.
    pub fn mark_watched(&mut self, catalog: &Catalog, id_or_title: &str) -> Result<bool> {
        let current = self.require_profile()?;
        let movie = catalog
            .resolve(id_or_title)
            .ok_or_else(|| SessionError::UnknownMovie(id_or_title.trim().to_string()))?;

        let mut updated = current.clone();
        if !updated.mark_watched(&movie.title) {
            return Ok(false);
        }

        self.store.save(&updated)?;
        info!("{} marked \"{}\" as watched", updated.name, movie.title);
        self.profile = Some(updated);
        Ok(true)
    }

    /// Titles the current user has watched, oldest first
    pub fn watched_movies(&self) -> Result<&[String]> {
        Ok(self.require_profile()?.watched_movies())
    }

    /// Forget the current user and delete the store
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear()?;
        if let Some(profile) = self.profile.take() {
            info!("Logged out {}", profile.name);
        }
        Ok(())
    }
}
