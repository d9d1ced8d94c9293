//! Worker thread implementation for preference persistence.
//!
//! The store is opened lazily on the first message so a missing or unwritable
//! data directory only costs an error response, never a failed plugin load.

use crate::domain::error::{GalleryError, Result};
use crate::infrastructure::paths;
use crate::preferences::{JsonPreferenceStore, PreferenceStore, Preferences};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// File name of the preference store inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Worker thread state.
///
/// Runs on a separate thread spawned by Zellij and processes messages sent
/// from the plugin thread.
#[derive(Serialize, Deserialize, Default)]
pub struct MemeVerseWorker {
    #[serde(skip)]
    store: Option<Box<dyn PreferenceStore>>,
}

impl MemeVerseWorker {
    /// Creates a worker over an already opened store.
    #[must_use]
    pub fn with_store(store: Box<dyn PreferenceStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Opens the JSON store in the plugin data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or an existing
    /// file cannot be parsed.
    fn open_default_store() -> Result<Box<dyn PreferenceStore>> {
        let path = paths::get_data_dir().join(PREFERENCES_FILE);
        Ok(Box::new(JsonPreferenceStore::open(path)?))
    }

    fn store(&mut self) -> Result<&mut Box<dyn PreferenceStore>> {
        if self.store.is_none() {
            self.store = Some(Self::open_default_store()?);
        }
        self.store
            .as_mut()
            .ok_or_else(|| GalleryError::Worker("preference store not initialized".to_string()))
    }

    /// Maps an operation result to a response, logging either way.
    fn respond<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation, "preference operation succeeded");
                on_success(value)
            }
            Err(e) => {
                tracing::error!(operation, error = %e, "preference operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    fn handle_load(&mut self) -> WorkerResponse {
        let result = self.store().and_then(|store| Preferences::load(&**store));
        Self::respond("load preferences", result, |prefs| WorkerResponse::PreferencesLoaded {
            dark_mode: prefs.dark_mode(),
        })
    }

    fn handle_save_dark_mode(&mut self, enabled: bool) -> WorkerResponse {
        let result = self
            .store()
            .and_then(|store| Preferences::new(enabled).persist(&mut **store));
        Self::respond("save dark mode", result, |()| WorkerResponse::PreferenceSaved { dark_mode: enabled })
    }

    /// Rebuilds the sender's span context so worker spans join its trace.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes one request and returns its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::LoadPreferences { .. } => self.handle_load(),
            WorkerMessage::SaveDarkMode { enabled, .. } => self.handle_save_dark_mode(enabled),
        }
    }
}

/// Tracks whether worker tracing has been initialized.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for MemeVerseWorker {
    /// Deserializes a request, handles it and posts the response back under
    /// the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        let response = match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(request) => self.handle_message(request),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: format!("malformed request: {e}"),
                }
            }
        };

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::error!(error = %e, "failed to serialize worker response"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryPreferenceStore;

    #[test]
    fn load_defaults_to_light_mode() {
        let mut worker = MemeVerseWorker::with_store(Box::new(MemoryPreferenceStore::new()));
        assert_eq!(
            worker.handle_message(WorkerMessage::load_preferences()),
            WorkerResponse::PreferencesLoaded { dark_mode: false }
        );
    }

    #[test]
    fn saved_flag_is_loaded_back() {
        let mut worker = MemeVerseWorker::with_store(Box::new(MemoryPreferenceStore::new()));
        assert_eq!(
            worker.handle_message(WorkerMessage::save_dark_mode(true)),
            WorkerResponse::PreferenceSaved { dark_mode: true }
        );
        assert_eq!(
            worker.handle_message(WorkerMessage::load_preferences()),
            WorkerResponse::PreferencesLoaded { dark_mode: true }
        );
    }

    #[test]
    fn json_store_backs_the_worker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFERENCES_FILE);
        let store = JsonPreferenceStore::open(path.clone()).unwrap();
        let mut worker = MemeVerseWorker::with_store(Box::new(store));
        worker.handle_message(WorkerMessage::save_dark_mode(true));

        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("\"darkMode\": true"));
    }

    #[test]
    fn garbage_trace_context_is_ignored() {
        let mut worker = MemeVerseWorker::with_store(Box::new(MemoryPreferenceStore::new()));
        let message = WorkerMessage::LoadPreferences {
            trace_context: Some(crate::worker::TraceContext {
                trace_id: "not hex".into(),
                parent_span_id: "also not hex".into(),
            }),
        };
        assert!(matches!(worker.handle_message(message), WorkerResponse::PreferencesLoaded { .. }));
    }
}
