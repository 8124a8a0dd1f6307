//! Single-record JSON store for the local profile.
//!
//! The whole profile is read at startup and the whole profile is rewritten on
//! every change. Deleting the file is how logout forgets the user.

use crate::error::{ProfileError, Result};
use crate::types::UserProfile;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name used when no path is configured
pub const DEFAULT_STORE_FILE: &str = "cinemate_user.json";

/// Reads and writes exactly one `UserProfile` at a fixed path
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored profile.
    ///
    /// # Returns
    /// * `Ok(None)` - no store file exists
    /// * `Ok(Some(profile))` - the file parsed cleanly
    /// * `Err` - the file exists but couldn't be read or parsed
    pub fn load(&self) -> Result<Option<UserProfile>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let mut profile: UserProfile = serde_json::from_str(&contents)?;
        profile.dedup_watched();
        debug!("Loaded profile for {} from {}", profile.name, self.path.display());
        Ok(Some(profile))
    }

    /// Like `load`, but any failure counts as "no user registered"
    pub fn load_or_none(&self) -> Option<UserProfile> {
        match self.load() {
            Ok(profile) => profile,
            Err(e) => {
                warn!(
                    "Ignoring unreadable profile store {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Overwrite the store with `profile`.
    ///
    /// Writes a sibling temp file first and renames it over the store, so a
    /// crash mid-write leaves the previous profile intact.
    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let json = serde_json::to_string_pretty(profile)?;
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json).map_err(|e| self.io_error(e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.io_error(e));
        }

        debug!("Saved profile for {} to {}", profile.name, self.path.display());
        Ok(())
    }

    /// Delete the store. A store that is already gone is fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Cleared profile store {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(&self, source: std::io::Error) -> ProfileError {
        ProfileError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Genre;
    use chrono::NaiveDate;

    /// A store path under the system temp dir that no other test uses
    fn temp_store() -> ProfileStore {
        let path = std::env::temp_dir()
            .join("cinemate-profile-tests")
            .join(format!("{}.json", uuid::Uuid::new_v4()));
        ProfileStore::new(path)
    }

    fn sample_profile() -> UserProfile {
        let mut profile = UserProfile::new(
            "Linus",
            "linus@example.com",
            16,
            vec![Genre::Drama],
            "$argon2id$stub",
            NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(),
        );
        profile.mark_watched("Fight Club");
        profile
    }

    #[test]
    fn test_load_missing_is_none() {
        let store = temp_store();
        assert!(store.load().unwrap().is_none());
        assert!(store.load_or_none().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = temp_store();
        let profile = sample_profile();

        store.save(&profile).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded, profile);
        assert!(!store.tmp_path().exists());
        store.clear().unwrap();
    }

    #[test]
    fn test_save_overwrites_whole_record() {
        let store = temp_store();
        let mut profile = sample_profile();
        store.save(&profile).unwrap();

        profile.mark_watched("Heat");
        store.save(&profile).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.watched_movies(), &["Fight Club", "Heat"]);
        store.clear().unwrap();
    }

    #[test]
    fn test_stored_json_shape() {
        let store = temp_store();
        store.save(&sample_profile()).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["registration_date"], "2023-11-02");
        assert_eq!(value["genres"][0], "Drama");
        assert_eq!(value["watched_movies"][0], "Fight Club");
        assert!(value.get("password").is_none());
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_treated_as_no_user() {
        let store = temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.load(), Err(ProfileError::Corrupt(_))));
        assert!(store.load_or_none().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn test_clear_removes_profile() {
        let store = temp_store();
        store.save(&sample_profile()).unwrap();

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        // Clearing twice is harmless
        store.clear().unwrap();
    }

    #[test]
    fn test_failed_rename_leaves_no_temp_file() {
        let store = temp_store();
        // A directory in the way makes the rename fail
        fs::create_dir_all(store.path().join("occupied")).unwrap();

        let result = store.save(&sample_profile());
        assert!(matches!(result, Err(ProfileError::Io { .. })));
        assert!(!store.tmp_path().exists());

        fs::remove_dir_all(store.path()).unwrap();
    }
}
