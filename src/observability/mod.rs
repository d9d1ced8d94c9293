//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `memeverse-otlp.json` inside the plugin data directory, one
//! OTLP document per line, rotated at 10 MB with three numbered backups.
//! Worker spans join the plugin's traces through the context carried on each
//! worker message.
//!
//! The level comes from the `trace_level` plugin option and defaults to
//! `info`. Any `EnvFilter` directive works, e.g. `memeverse=debug`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

/// `service.name` resource attribute and instrumentation scope.
pub const SERVICE_NAME: &str = "MemeVerse";

/// Trace file name inside the data directory.
pub const TRACE_FILE: &str = "memeverse-otlp.json";
