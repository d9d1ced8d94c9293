//! Path-based navigation between the gallery, detail and not-found screens.
//!
//! | Path           | Route                |
//! |----------------|----------------------|
//! | `/`, `/memes`  | [`Route::Gallery`]   |
//! | `/memes/<id>`  | [`Route::Detail`]    |
//! | `/404`         | [`Route::NotFound`]  |
//! | anything else  | [`Route::NotFound`]  |

use std::fmt;

/// A screen the plugin can show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Gallery,
    Detail { id: String },
    NotFound,
}

impl Route {
    /// Resolves a path into a route.
    ///
    /// Trailing slashes are ignored, and unknown paths resolve to
    /// [`Route::NotFound`].
    ///
    /// # Example
    ///
    /// ```
    /// use memeverse::app::Route;
    ///
    /// assert_eq!(Route::resolve("/memes/"), Route::Gallery);
    /// assert_eq!(Route::resolve("/memes/61579"), Route::Detail { id: "61579".into() });
    /// assert_eq!(Route::resolve("/nope"), Route::NotFound);
    /// ```
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');

        match normalized {
            "" | "/memes" => Self::Gallery,
            "/404" => Self::NotFound,
            other => match other.strip_prefix("/memes/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::Detail { id: id.to_string() },
                _ => {
                    tracing::debug!(path = %trimmed, "unknown path, redirecting to not found");
                    Self::NotFound
                }
            },
        }
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Gallery => "/".to_string(),
            Self::Detail { id } => format!("/memes/{id}"),
            Self::NotFound => "/404".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
