//! Catalog item domain model.
//!
//! A [`CatalogItem`] is one meme template as returned by the catalog source,
//! enriched at ingestion with a category and synthetic engagement counters.
//! Items are immutable once fetched; the detail view keeps its own copies of
//! the counters it lets the user change.

use super::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// One unit of media shown in the gallery.
///
/// # Fields
///
/// - `id`: Source identifier, unique within one catalog
/// - `name`: Display text, used for search and as the detail title
/// - `source_url`: Location of the image asset
/// - `category`: Fixed category assigned at ingestion
/// - `likes` / `comments`: Synthetic engagement counters
/// - `created_at`: Timestamp used only for recency sorting
/// - `width` / `height` / `box_count`: Template metadata carried from the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub source_url: String,
    pub category: Category,
    pub likes: u32,
    pub comments: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub box_count: u32,
}

impl CatalogItem {
    /// Starts building an item with the given id and name.
    ///
    /// Everything else defaults to zero counters, [`Category::Trending`], an
    /// empty URL and a creation time of now.
    #[must_use]
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> CatalogItemBuilder {
        CatalogItemBuilder {
            item: Self {
                id: id.into(),
                name: name.into(),
                source_url: String::new(),
                category: Category::Trending,
                likes: 0,
                comments: 0,
                created_at: Utc::now(),
                width: 0,
                height: 0,
                box_count: 0,
            },
        }
    }

    /// Returns a short human-readable age relative to `now`.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use memeverse::domain::CatalogItem;
    ///
    /// let now = Utc::now();
    /// let item = CatalogItem::builder("1", "Distracted Boyfriend")
    ///     .created_at(now - Duration::hours(3))
    ///     .build();
    /// assert_eq!(item.age_label(now), "3h ago");
    /// ```
    #[must_use]
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let diff = (now - self.created_at).num_seconds();

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

/// Builder for [`CatalogItem`], mostly used by ingestion and tests.
#[derive(Debug, Clone)]
pub struct CatalogItemBuilder {
    item: CatalogItem,
}

impl CatalogItemBuilder {
    #[must_use]
    pub fn source_url(mut self, url: impl Into<String>) -> Self {
        self.item.source_url = url.into();
        self
    }

    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.item.category = category;
        self
    }

    #[must_use]
    pub const fn likes(mut self, likes: u32) -> Self {
        self.item.likes = likes;
        self
    }

    #[must_use]
    pub const fn comments(mut self, comments: u32) -> Self {
        self.item.comments = comments;
        self
    }

    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.item.created_at = created_at;
        self
    }

    #[must_use]
    pub const fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.item.width = width;
        self.item.height = height;
        self
    }

    #[must_use]
    pub const fn box_count(mut self, box_count: u32) -> Self {
        self.item.box_count = box_count;
        self
    }

    #[must_use]
    pub fn build(self) -> CatalogItem {
        self.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn age_label_buckets() {
        let now = Utc::now();
        let at = |offset: Duration| CatalogItem::builder("1", "x").created_at(now - offset).build();

        assert_eq!(at(Duration::seconds(10)).age_label(now), "just now");
        assert_eq!(at(Duration::minutes(5)).age_label(now), "5m ago");
        assert_eq!(at(Duration::hours(23)).age_label(now), "23h ago");
        assert_eq!(at(Duration::days(12)).age_label(now), "12d ago");
    }

    #[test]
    fn builder_sets_fields() {
        let item = CatalogItem::builder("61579", "One Does Not Simply")
            .source_url("https://i.imgflip.com/1bij.jpg")
            .category(Category::Classic)
            .likes(12)
            .comments(3)
            .dimensions(568, 335)
            .box_count(2)
            .build();

        assert_eq!(item.id, "61579");
        assert_eq!(item.category, Category::Classic);
        assert_eq!((item.likes, item.comments), (12, 3));
        assert_eq!((item.width, item.height, item.box_count), (568, 335, 2));
    }
}
