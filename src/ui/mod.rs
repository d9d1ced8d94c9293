//! User interface rendering layer with component-based architecture.
//!
//! Turns view models into ANSI-styled output through small component
//! renderers, themed by whichever half of the [`ThemePair`] the dark-mode
//! preference selects.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Cursor positioning and column math
//! - [`theme`]: Color schemes and ANSI escape sequence generation
//!
//! # Example
//!
//! ```rust,no_run
//! use memeverse::app::AppState;
//! use memeverse::ui::{render, ThemePair};
//!
//! let state = AppState::new(ThemePair::default());
//! render(&state, 24, 80); // Renders to stdout
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemePair};
pub use viewmodel::{
    Body, CommentLine, DetailView, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, GalleryView, HeaderInfo,
    NotFoundView, PaginationInfo, SearchBarInfo, UIViewModel,
};
