//! Input mode state machine.
//!
//! The plugin reads keys in one of three modes:
//! - **Normal**: navigation and commands (paging, filters, likes, routing)
//! - **Search**: keys edit the raw search input, debounced into the query
//! - **Comment**: keys edit the comment draft of the open detail view
//!
//! # Example
//!
//! ```rust
//! use memeverse::app::InputMode;
//!
//! let mode = InputMode::Search;
//! assert!(mode.is_typing());
//! ```

/// Current input handling mode.
///
/// Controls which keybindings are active and how characters are interpreted.
/// Determines the displayed footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    #[default]
    Normal,

    /// Typing into the gallery search bar.
    ///
    /// Every edit feeds the search debouncer; Enter applies the input at once,
    /// Esc clears it.
    Search,

    /// Typing a comment in the detail view.
    ///
    /// Enter posts the draft, Esc discards it.
    Comment,
}

impl InputMode {
    /// Returns `true` when plain characters are text input rather than commands.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search | Self::Comment)
    }
}
