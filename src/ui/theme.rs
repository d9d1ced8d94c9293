//! Theme management and ANSI escape sequence generation.
//!
//! Colors come from TOML theme files, either built into the binary or read from
//! disk. The gallery keeps a light and a dark theme side by side in a
//! [`ThemePair`]; the dark-mode preference decides which one renders.
//!
//! # Built-in Themes
//!
//! - `catppuccin-latte`: light (default light theme)
//! - `catppuccin-mocha`: dark (default dark theme)
//! - `catppuccin-frappe`: dark
//! - `catppuccin-macchiato`: dark
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! accent = "#f5c2e7"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#cba6f7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#6c7086"
//! search_bar_active = "#f5c2e7"
//! page_current_fg = "#1e1e2e"
//! page_current_bg = "#89b4fa"
//! category_fg = "#94e2d5"
//! like_fg = "#f38ba8"
//! empty_state_fg = "#89b4fa"
//! ```

use crate::domain::error::{GalleryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the built-in light theme.
pub const DEFAULT_LIGHT: &str = "catppuccin-latte";

/// Name of the built-in dark theme.
pub const DEFAULT_DARK: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_bg: Option<String>,
    /// Second half of the title and other highlights.
    pub accent: String,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border while unfocused.
    pub search_bar_border: String,
    /// Search bar and comment box border while typing.
    pub search_bar_active: String,

    /// Current page marker foreground.
    pub page_current_fg: String,
    /// Current page marker background.
    pub page_current_bg: String,

    /// Category column and badge color.
    pub category_fg: String,
    /// Like counter color.
    pub like_fg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of the built-in themes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use memeverse::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Theme`] if the file cannot be read or is not a
    /// valid theme document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| GalleryError::Theme(format!("failed to read {}: {e}", path.display())))?;

        Self::from_toml(&contents)
    }

    /// Parses a theme from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Theme`] on invalid syntax or missing colors.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| GalleryError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Returns the built-in light theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme file fails to parse, which the theme tests
    /// rule out.
    #[must_use]
    pub fn light() -> Self {
        Self::from_name(DEFAULT_LIGHT).expect("built-in light theme should always parse")
    }

    /// Converts a hex color to an RGB tuple, white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use memeverse::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the built-in dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme file fails to parse, which the theme tests
    /// rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_DARK).expect("built-in dark theme should always parse")
    }
}

/// The light and dark themes, selected by the dark-mode preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePair {
    pub light: Theme,
    pub dark: Theme,
}

impl ThemePair {
    #[must_use]
    pub const fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Returns the theme for the given mode.
    #[must_use]
    pub const fn pick(&self, dark_mode: bool) -> &Theme {
        if dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}

impl Default for ThemePair {
    fn default() -> Self {
        Self::new(Theme::light(), Theme::default())
    }
}
