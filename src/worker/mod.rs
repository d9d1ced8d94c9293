//! Background worker owning the preference store.
//!
//! Preference file I/O runs on a Zellij worker thread so the plugin thread
//! never blocks on disk. The two sides exchange JSON messages only.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: worker implementation and message processing

pub mod handler;
pub mod messages;

pub use handler::MemeVerseWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};

/// Name under which the plugin registers the worker and routes its messages.
pub const WORKER_NAME: &str = "memeverse";
