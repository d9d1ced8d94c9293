//! Plugin/worker message protocol.
//!
//! Requests and responses are JSON-serialized across the Zellij worker
//! boundary. Every request carries an optional [`TraceContext`] so spans in the
//! worker thread link back to the handler span that caused them.

use serde::{Deserialize, Serialize};

/// Serialized OpenTelemetry parent span, carried inside worker requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// Trace ID as 32 hex digits.
    pub trace_id: String,

    /// Span ID of the sending span as 16 hex digits.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the active span's OpenTelemetry context.
    ///
    /// Returns `None` when no valid span is active, e.g. before tracing is
    /// initialized or in tests.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates one constructor per request variant that fills in the current
/// trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Creates a `", stringify!($variant), "` request with the current trace context.")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_preferences(LoadPreferences {}),
    save_dark_mode(SaveDarkMode { enabled: bool }),
}

/// Requests sent from the plugin to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the stored preferences.
    LoadPreferences {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Persist the dark-mode flag.
    SaveDarkMode {
        enabled: bool,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Trace context attached to this request, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadPreferences { trace_context } | Self::SaveDarkMode { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }
}

/// Responses sent from the worker back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// Stored preferences, defaults applied.
    PreferencesLoaded { dark_mode: bool },

    /// The dark-mode flag was written.
    PreferenceSaved { dark_mode: bool },

    /// A worker operation failed.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_omit_missing_trace_context() {
        let message = WorkerMessage::save_dark_mode(true);
        assert_eq!(message.trace_context(), None);

        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"SaveDarkMode":{"enabled":true}}"#);
    }

    #[test]
    fn trace_context_survives_serialization() {
        let message = WorkerMessage::LoadPreferences {
            trace_context: Some(TraceContext {
                trace_id: "0af7651916cd43dd8448eb211c80319c".into(),
                parent_span_id: "b7ad6b7169203331".into(),
            }),
        };
        let json = serde_json::to_string(&message).unwrap();
        let back: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }
}
