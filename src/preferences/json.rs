//! JSON file-based preference store.
//!
//! Keeps every preference in one small JSON object and rewrites it atomically
//! (write-to-temp + rename) on each change, so a crash never leaves a
//! half-written file behind.

use crate::domain::error::{GalleryError, Result};
use crate::preferences::store::PreferenceStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceFile {
    /// Version of the file format for future migrations.
    version: u32,

    #[serde(default)]
    values: BTreeMap<String, Value>,
}

impl Default for PreferenceFile {
    fn default() -> Self {
        Self {
            version: 1,
            values: BTreeMap::new(),
        }
    }
}

/// JSON file preference backend.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "values": {
///     "darkMode": true
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonPreferenceStore {
    file_path: PathBuf,
    data: PreferenceFile,
}

impl JsonPreferenceStore {
    /// Opens the store at `file_path`, loading existing values if the file exists.
    ///
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but is not valid JSON in the expected shape
    /// - File permissions prevent reading
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no preference file yet, starting empty");
            PreferenceFile::default()
        };

        tracing::debug!(value_count = data.values.len(), "preference store ready");
        Ok(Self { file_path, data })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<PreferenceFile> {
        let contents = std::fs::read_to_string(path)?;
        let data: PreferenceFile = serde_json::from_str(&contents)
            .map_err(|e| GalleryError::Storage(format!("failed to parse preference file: {e}")))?;

        tracing::debug!(version = data.version, values = data.values.len(), "loaded preferences");
        Ok(data)
    }

    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing preferences to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.data.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let _span = tracing::debug_span!("json_set_preference", key = %key).entered();

        if self.data.values.get(key) == Some(&value) {
            tracing::trace!("value unchanged, skipping write");
            return Ok(());
        }

        self.data.values.insert(key.to_string(), value);
        self.save_to_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonPreferenceStore::open(dir.path().join("nested").join("prefs.json")).unwrap();
        assert_eq!(store.get("darkMode").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = JsonPreferenceStore::open(path.clone()).unwrap();
        store.set("darkMode", json!(true)).unwrap();
        drop(store);

        let reopened = JsonPreferenceStore::open(path).unwrap();
        assert_eq!(reopened.get("darkMode").unwrap(), Some(json!(true)));
    }

    #[test]
    fn no_temporary_file_is_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let mut store = JsonPreferenceStore::open(path.clone()).unwrap();
        store.set("darkMode", json!(false)).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = JsonPreferenceStore::open(path).unwrap_err();
        assert!(matches!(err, GalleryError::Storage(_)));
    }
}
