//! Domain layer for the MemeVerse plugin.
//!
//! Core types shared by every other layer, independent of Zellij APIs or
//! storage concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: The catalog item model
//! - [`category`]: Fixed category set, category filter and sort keys
//!
//! # Examples
//!
//! ```
//! use memeverse::domain::{CatalogItem, Category};
//!
//! let item = CatalogItem::builder("181913649", "Drake Hotline Bling")
//!     .category(Category::Classic)
//!     .likes(420)
//!     .build();
//! assert_eq!(item.category, Category::Classic);
//! ```

pub mod category;
pub mod error;
pub mod item;

pub use category::{Category, CategoryFilter, SortKey};
pub use error::{GalleryError, Result};
pub use item::{CatalogItem, CatalogItemBuilder};
