//! Catalog ingestion.
//!
//! Turns the raw catalog response into [`CatalogItem`](crate::domain::CatalogItem)s.
//! The source only provides identity and image data; engagement counters,
//! timestamps and categories are synthesized by a [`MetadataSource`] so tests
//! can pin them down with a seed or a fixed double.
//!
//! # Modules
//!
//! - [`ingest`]: Response parsing and item enrichment
//! - [`metadata`]: Injectable metadata generation

pub mod ingest;
pub mod metadata;

pub use ingest::{check_status, ingest, parse_catalog_response, RawMeme};
pub use metadata::{MetadataSource, RandomMetadata};
