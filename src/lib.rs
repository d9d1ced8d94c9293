//! MemeVerse: a Zellij plugin for browsing a meme catalog.
//!
//! - Live search, debounced so typing does not re-filter on every keystroke
//! - Category filter (Trending, New, Classic, Random) and sort by likes,
//!   comments or date
//! - Pagination with a collapsing page-number window
//! - Detail view with a local like toggle and comment thread
//! - Light and dark themes, with the choice persisted by a worker thread
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, routing                          │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!      │            │             │             │
//! ┌──────────┐ ┌──────────┐ ┌────────────┐ ┌──────────────┐
//! │ query/   │ │ catalog/ │ │ detail/    │ │ worker/      │
//! │ pipeline │ │ ingest   │ │ likes,     │ │ preferences/ │
//! │ debounce │ │ metadata │ │ comments   │ │ JSON store   │
//! └──────────┘ └──────────┘ └────────────┘ └──────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  domain/ (items, categories, errors)                │
//! │  ui/ (themes, components) · infrastructure/ (paths) │
//! │  observability/ (OpenTelemetry file export)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/memeverse.wasm" {
//!         api_url "https://api.imgflip.com/get_memes"
//!         page_size "12"
//!         debounce_ms "500"
//!         theme_light "catppuccin-latte"
//!         theme_dark "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load**: parse [`Config`], initialize tracing, build the
//!    [`AppState`] via [`initialize`], request web access
//! 2. **Permissions Granted**: fetch the catalog and ask the worker for the
//!    stored dark-mode flag
//! 3. **Catalog Fetched**: ingest the response and render the first page
//! 4. **Input**: keys become [`Event`]s; [`handle_event`] returns actions for
//!    the shim to run (HTTP request, timer, worker message, hide)
//!
//! # Example
//!
//! ```rust
//! use memeverse::{handle_event, initialize, Config, Event};
//!
//! let config = Config { seed: Some(7), ..Default::default() };
//! let mut state = initialize(&config);
//!
//! let (_render, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert_eq!(actions.len(), 2);
//! # Ok::<(), memeverse::GalleryError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod detail;
pub mod domain;
pub mod infrastructure;
pub mod preferences;
pub mod query;
pub mod ui;
pub mod worker;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Route};
pub use domain::{CatalogItem, GalleryError, Result};
pub use ui::Theme;

use catalog::RandomMetadata;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::time::Duration;
use ui::theme::{ThemePair, DEFAULT_DARK, DEFAULT_LIGHT};

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog endpoint. Default: [`app::DEFAULT_API_URL`]
    pub api_url: String,

    /// Items per page. Default: 12
    pub page_size: NonZeroUsize,

    /// Quiet period before a search edit is applied. Default: 500 ms
    pub debounce: Duration,

    /// Built-in theme used in light mode. Default: `catppuccin-latte`
    pub theme_light: Option<String>,

    /// Built-in theme used in dark mode. Default: `catppuccin-mocha`
    pub theme_dark: Option<String>,

    /// Path to a TOML theme used in both modes. Takes precedence over the
    /// theme names. `~` maps to the sandbox home.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,

    /// Seed for the generated likes, comments, dates and categories. Unset
    /// means a fresh seed per load.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: app::DEFAULT_API_URL.to_string(),
            page_size: query::DEFAULT_PAGE_SIZE,
            debounce: query::DEFAULT_DEBOUNCE,
            theme_light: None,
            theme_dark: None,
            theme_file: None,
            trace_level: None,
            seed: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparsable or out-of-range values fall back to their defaults with a
    /// warning; a zero `page_size` counts as out of range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use memeverse::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "20".to_string());
    /// map.insert("debounce_ms".to_string(), "250".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size.get(), 20);
    /// assert_eq!(config.debounce.as_millis(), 250);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let page_size = parse_or(config, "page_size", defaults.page_size);
        let default_ms = u64::try_from(defaults.debounce.as_millis()).unwrap_or(u64::MAX);
        let debounce = parse_or(config, "debounce_ms", default_ms);

        Self {
            api_url: text("api_url").unwrap_or(defaults.api_url),
            page_size,
            debounce: Duration::from_millis(debounce),
            theme_light: text("theme_light"),
            theme_dark: text("theme_dark"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
            seed: config.get("seed").and_then(|seed| seed.trim().parse().ok()),
        }
    }

    /// Resolves the light and dark themes.
    ///
    /// Unknown names and unreadable files fall back to the built-in defaults.
    #[must_use]
    pub fn themes(&self) -> ThemePair {
        if let Some(file) = &self.theme_file {
            let path = infrastructure::expand_tilde(file);
            match Theme::from_file(&path) {
                Ok(theme) => return ThemePair::new(theme.clone(), theme),
                Err(e) => tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using built-ins"),
            }
        }

        let named = |name: Option<&String>, fallback: &str| {
            name.and_then(|name| {
                let theme = Theme::from_name(name);
                if theme.is_none() {
                    tracing::warn!(theme_name = %name, "unknown theme, using default");
                }
                theme
            })
            .or_else(|| Theme::from_name(fallback))
        };

        let defaults = ThemePair::default();
        ThemePair::new(
            named(self.theme_light.as_ref(), DEFAULT_LIGHT).unwrap_or(defaults.light),
            named(self.theme_dark.as_ref(), DEFAULT_DARK).unwrap_or(defaults.dark),
        )
    }
}

/// Parses `key` into `T`, keeping `default` if missing or invalid.
fn parse_or<T: std::str::FromStr>(config: &BTreeMap<String, String>, key: &str, default: T) -> T {
    match config.get(key).map(|value| value.trim().parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            tracing::warn!(key, value = ?config.get(key), "invalid configuration value, using default");
            default
        }
        None => default,
    }
}

/// Builds the initial application state from configuration.
///
/// The catalog starts empty; it is fetched once web access is granted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize", page_size = config.page_size.get(), seeded = config.seed.is_some()).entered();

    let metadata = config.seed.map_or_else(RandomMetadata::from_entropy, RandomMetadata::from_seed);

    AppState::new(config.themes())
        .with_page_size(config.page_size)
        .with_debounce(config.debounce)
        .with_api_url(config.api_url.clone())
        .with_metadata(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = Config::from_zellij(&map(&[("page_size", "0"), ("debounce_ms", "soon"), ("seed", "x")]));
        assert_eq!(config.page_size.get(), 12);
        assert_eq!(config.debounce, Duration::from_millis(500));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn values_are_parsed() {
        let config = Config::from_zellij(&map(&[
            ("api_url", " http://localhost:9000/memes "),
            ("page_size", "5"),
            ("seed", "42"),
            ("theme_dark", "catppuccin-frappe"),
            ("trace_level", "debug"),
        ]));
        assert_eq!(config.api_url, "http://localhost:9000/memes");
        assert_eq!(config.page_size.get(), 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.themes().dark.name, "catppuccin-frappe");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_theme_names_use_builtins() {
        let config = Config {
            theme_light: Some("nope".into()),
            ..Config::default()
        };
        let themes = config.themes();
        assert_eq!(themes.light.name, DEFAULT_LIGHT);
        assert_eq!(themes.dark.name, DEFAULT_DARK);
    }

    #[test]
    fn theme_file_applies_to_both_modes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.toml");
        let mut theme = Theme::light();
        theme.name = "mine".into();
        std::fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        let config = Config {
            theme_file: Some(path.display().to_string()),
            ..Config::default()
        };
        let themes = config.themes();
        assert_eq!(themes.light.name, "mine");
        assert_eq!(themes.dark.name, "mine");
    }

    #[test]
    fn initialize_applies_config() {
        let config = Config {
            page_size: NonZeroUsize::new(3).unwrap(),
            api_url: "http://x.test".into(),
            seed: Some(1),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.page_size.get(), 3);
        assert_eq!(state.api_url, "http://x.test");
        assert!(state.catalog.is_empty());
    }
}
