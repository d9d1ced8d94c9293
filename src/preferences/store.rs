//! Preference store abstraction.
//!
//! A key/value store for display preferences. The trait is deliberately
//! small: the plugin only ever reads one key at startup and writes it back
//! when it changes.

use crate::domain::error::Result;
use serde_json::Value;
use std::collections::BTreeMap;

/// Abstraction over persistent preference backends.
///
/// # Implementations
///
/// - [`JsonPreferenceStore`](super::JsonPreferenceStore): JSON file with atomic writes
/// - [`MemoryPreferenceStore`]: in-memory map, for tests and sandboxes without disk
pub trait PreferenceStore: Send {
    /// Returns the stored value for `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

/// Non-persistent [`PreferenceStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, Value>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
