//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij directly. It returns a `Vec<Action>`
//! after each event and the plugin shim executes them in order. This keeps
//! [`handle_event`](super::handle_event) testable without a host.
//!
//! # Example
//!
//! ```rust
//! use memeverse::app::Action;
//! use memeverse::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::FetchCatalog { url: "https://api.imgflip.com/get_memes".into() },
//!     Action::PostToWorker(WorkerMessage::load_preferences()),
//! ];
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues an HTTP GET for the catalog.
    ///
    /// The body comes back as a `WebRequestResult` event and is fed to the
    /// handler as [`Event::CatalogFetched`](super::Event::CatalogFetched).
    FetchCatalog {
        /// Catalog endpoint.
        url: String,
    },

    /// Schedules a one-shot timer.
    ///
    /// Used by the search debouncer; the firing arrives as
    /// [`Event::DebounceElapsed`](super::Event::DebounceElapsed).
    ScheduleTimer {
        /// Delay in seconds.
        seconds: f64,
    },

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),
}
