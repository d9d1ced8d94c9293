//! Category set, category filter and sort keys.
//!
//! Categories are assigned once at ingestion and never change. The filter and
//! sort key are the user-controlled halves of the query state; both cycle
//! through their options in the same order the filter bar lists them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of categories an item can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Trending,
    New,
    Classic,
    Random,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 4] = [Self::Trending, Self::New, Self::Classic, Self::Random];

    /// Returns the display label (`"Trending"`, `"New"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trending => "Trending",
            Self::New => "New",
            Self::Classic => "Classic",
            Self::Random => "Random",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category restriction applied before searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// No restriction.
    #[default]
    All,
    /// Only items of this category.
    Only(Category),
}

impl CategoryFilter {
    /// Returns `true` if `category` passes this filter.
    #[must_use]
    pub fn accepts(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }

    /// Returns the next filter option, wrapping from the last category to `All`.
    ///
    /// ```
    /// use memeverse::domain::{Category, CategoryFilter};
    ///
    /// assert_eq!(CategoryFilter::All.next(), CategoryFilter::Only(Category::Trending));
    /// assert_eq!(CategoryFilter::Only(Category::Random).next(), CategoryFilter::All);
    /// ```
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(Category::Trending),
            Self::Only(Category::Trending) => Self::Only(Category::New),
            Self::Only(Category::New) => Self::Only(Category::Classic),
            Self::Only(Category::Classic) => Self::Only(Category::Random),
            Self::Only(Category::Random) => Self::All,
        }
    }

    /// Label shown in the filter selector.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::All => "All Categories".to_string(),
            Self::Only(category) => format!("{category} Memes"),
        }
    }
}

/// Ordering applied after filtering.
///
/// `All` is literal: it keeps the filtered order and applies no ordering at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    All,
    /// Most likes first.
    Likes,
    /// Most comments first.
    Comments,
    /// Newest first.
    Date,
}

impl SortKey {
    /// Returns the next sort option, wrapping from `Date` back to `All`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Likes,
            Self::Likes => Self::Comments,
            Self::Comments => Self::Date,
            Self::Date => Self::All,
        }
    }

    /// Label shown in the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Likes => "Most Liked",
            Self::Comments => "Most Comments",
            Self::Date => "Newest First",
        }
    }
}
