//! Display preferences.
//!
//! The only persisted state in the plugin is the dark-mode flag. It lives in
//! an explicit [`Preferences`] context that is loaded from a
//! [`PreferenceStore`] at startup, updated through methods that report
//! whether anything changed, and written back by whoever owns the store (the
//! background worker, in the plugin).
//!
//! # Modules
//!
//! - `store`: [`PreferenceStore`] trait and in-memory implementation
//! - `json`: JSON file implementation with atomic writes

pub mod json;
pub mod store;

pub use json::JsonPreferenceStore;
pub use store::{MemoryPreferenceStore, PreferenceStore};

use crate::domain::error::Result;
use serde::{Deserialize, Serialize};

/// Key under which the dark-mode flag is stored.
pub const DARK_MODE_KEY: &str = "darkMode";

/// A preference value that just changed and should be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreferenceChange {
    DarkMode(bool),
}

/// Display preferences context.
///
/// # Example
///
/// ```
/// use memeverse::preferences::{MemoryPreferenceStore, PreferenceChange, Preferences};
///
/// let mut store = MemoryPreferenceStore::new();
/// let mut prefs = Preferences::load(&store).unwrap();
/// assert!(!prefs.dark_mode());
///
/// let change = prefs.toggle_dark_mode();
/// assert_eq!(change, PreferenceChange::DarkMode(true));
/// prefs.persist(&mut store).unwrap();
///
/// assert!(Preferences::load(&store).unwrap().dark_mode());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    dark_mode: bool,
}

impl Preferences {
    #[must_use]
    pub const fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    /// Restores preferences from `store`.
    ///
    /// A missing key means light mode. A stored value that is not a boolean is
    /// logged and treated as missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn load(store: &dyn PreferenceStore) -> Result<Self> {
        let dark_mode = match store.get(DARK_MODE_KEY)? {
            None => false,
            Some(serde_json::Value::Bool(enabled)) => enabled,
            Some(other) => {
                tracing::warn!(value = %other, "ignoring non-boolean dark mode preference");
                false
            }
        };
        Ok(Self { dark_mode })
    }

    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Sets dark mode, returning the change if the value differs.
    pub fn set_dark_mode(&mut self, enabled: bool) -> Option<PreferenceChange> {
        if self.dark_mode == enabled {
            return None;
        }
        self.dark_mode = enabled;
        Some(PreferenceChange::DarkMode(enabled))
    }

    /// Flips dark mode and returns the resulting change.
    pub fn toggle_dark_mode(&mut self) -> PreferenceChange {
        self.dark_mode = !self.dark_mode;
        PreferenceChange::DarkMode(self.dark_mode)
    }

    /// Writes every preference to `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn persist(&self, store: &mut dyn PreferenceStore) -> Result<()> {
        store.set(DARK_MODE_KEY, serde_json::Value::Bool(self.dark_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_key_means_light_mode() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(Preferences::load(&store).unwrap(), Preferences::new(false));
    }

    #[test]
    fn non_boolean_value_is_ignored() {
        let mut store = MemoryPreferenceStore::new();
        store.set(DARK_MODE_KEY, json!("yes")).unwrap();
        assert!(!Preferences::load(&store).unwrap().dark_mode());
    }

    #[test]
    fn set_reports_only_real_changes() {
        let mut prefs = Preferences::new(false);
        assert_eq!(prefs.set_dark_mode(false), None);
        assert_eq!(prefs.set_dark_mode(true), Some(PreferenceChange::DarkMode(true)));
        assert!(prefs.dark_mode());
    }

    #[test]
    fn round_trip_through_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        let mut store = JsonPreferenceStore::open(path.clone()).unwrap();
        let mut prefs = Preferences::load(&store).unwrap();
        prefs.toggle_dark_mode();
        prefs.persist(&mut store).unwrap();

        let reopened = JsonPreferenceStore::open(path).unwrap();
        assert!(Preferences::load(&reopened).unwrap().dark_mode());
    }
}
