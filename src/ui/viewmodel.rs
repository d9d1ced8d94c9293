//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready strings and flags.
//!
//! # Example
//!
//! ```rust
//! use memeverse::ui::viewmodel::{Body, FooterInfo, HeaderInfo, NotFoundView, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo {
//!         title_lead: "Meme".to_string(),
//!         title_accent: "Verse".to_string(),
//!         mode_label: "light".to_string(),
//!         status: None,
//!     },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     body: Body::NotFound(NotFoundView {
//!         message: "404".to_string(),
//!         hint: "Enter: back to gallery".to_string(),
//!     }),
//! };
//! ```

use crate::query::PageMarker;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Route-specific content between header and footer.
    pub body: Body,
}

/// Screen content for the current route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Gallery(GalleryView),
    Detail(DetailView),
    NotFound(NotFoundView),
}

/// Title bar information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// First part of the title, rendered in the header color.
    pub title_lead: String,

    /// Second part of the title, rendered in the accent color.
    pub title_accent: String,

    /// Theme indicator shown on the right.
    pub mode_label: String,

    /// Transient status such as "Loading memes...".
    pub status: Option<String>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Gallery screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub search_bar: SearchBarInfo,
    pub filters: FilterBarInfo,

    /// "<Category> Memes" when a category filter is active.
    pub heading: Option<String>,

    /// Rows of the current page visible in the available height.
    pub rows: Vec<DisplayItem>,

    /// `None` when there is nothing to paginate.
    pub pagination: Option<PaginationInfo>,

    /// Shown instead of rows when the query matches nothing.
    pub empty_state: Option<EmptyState>,
}

/// One row in the gallery table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub name: String,
    pub category: String,
    pub likes: String,
    pub comments: String,
    pub age: String,
    pub is_selected: bool,
}

/// Search input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Raw input, which may run ahead of the applied term while debouncing.
    pub query: String,

    /// Whether the search bar has keyboard focus.
    pub is_editing: bool,

    /// Whether an edit is waiting for the debounce window to close.
    pub is_pending: bool,
}

/// Category and sort selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    pub category_label: String,
    pub sort_label: String,
    pub match_count: usize,
}

/// Pagination control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    pub markers: Vec<PageMarker>,
    pub current: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Detail screen for a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub name: String,
    pub url: String,
    pub dimensions: String,
    pub category: String,
    pub age: String,
    pub liked: bool,
    pub likes: u32,
    pub comment_count: usize,

    /// Comment draft, present while the comment input has focus.
    pub draft: Option<String>,

    pub comments: Vec<CommentLine>,

    /// Shown instead of comments when the thread is empty.
    pub empty_comments: Option<String>,
}

/// One rendered comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLine {
    pub username: String,
    pub text: String,
    pub timestamp: String,
}

/// Not-found screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundView {
    pub message: String,
    pub hint: String,
}
