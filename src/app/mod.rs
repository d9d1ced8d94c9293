//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the catalog, query, detail,
//! preference and worker layers.
//!
//! ```text
//! Keys / Timers / HTTP → Events → handle_event → State Mutations → Actions → Side Effects
//!                                      ↑                                         ↓
//!                                      └──────────── Worker Responses ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Which input, if any, has keyboard focus
//! - [`routes`]: Path resolution for gallery, detail and not-found screens
//! - [`state`]: Central application state and view model computation
//!
//! # Example
//!
//! ```rust
//! use memeverse::app::{handle_event, AppState, Event, Route};
//! use memeverse::ui::theme::ThemePair;
//!
//! let mut state = AppState::new(ThemePair::default());
//! handle_event(&mut state, &Event::Navigate("/404".to_string()))?;
//! assert_eq!(state.route, Route::NotFound);
//! # Ok::<(), memeverse::GalleryError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod routes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use routes::Route;
pub use state::{AppState, DEFAULT_API_URL};
