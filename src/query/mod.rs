//! Gallery query pipeline.
//!
//! Turns the catalog plus the user's query parameters into the page of items
//! to display and the page-number window for the pagination control. Every
//! step is a pure function over borrowed items:
//!
//! ```text
//! catalog → category filter → search filter → stable sort → page slice
//!                                                        ↘ page window
//! ```
//!
//! # Modules
//!
//! - [`state`]: [`QueryState`] with the page-reset rule
//! - [`pipeline`]: Filtering, sorting, pagination and [`compute_page`]
//! - [`window`]: Page-number window with ellipsis markers
//! - [`debounce`]: Coalescing of raw search keystrokes
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use memeverse::domain::{CatalogItem, SortKey};
//! use memeverse::query::{compute_page, QueryState};
//!
//! let catalog: Vec<CatalogItem> = (0..25)
//!     .map(|i| CatalogItem::builder(i.to_string(), format!("meme {i}")).likes(i).build())
//!     .collect();
//!
//! let mut query = QueryState::default();
//! query.set_sort_key(SortKey::Likes);
//!
//! let view = compute_page(&catalog, &query, NonZeroUsize::new(12).unwrap());
//! assert_eq!(view.total_pages, 3);
//! assert_eq!(view.items[0].likes, 24);
//! ```

pub mod debounce;
pub mod pipeline;
pub mod state;
pub mod window;

pub use debounce::{Debouncer, TimerRequest, DEFAULT_DEBOUNCE};
pub use pipeline::{
    compute_page, filter_by_category, filter_by_search, page_slice, select, sort_items,
    total_pages, PageView,
};
pub use state::QueryState;
pub use window::{page_window, PageMarker};

use std::num::NonZeroUsize;

/// Items per gallery page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(12) {
    Some(size) => size,
    None => panic!("page size must be non-zero"),
};
