//! Error types for the MemeVerse plugin.
//!
//! This module defines the centralized error type [`GalleryError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for MemeVerse operations.
///
/// Consolidates every failure that can occur at the edges of the plugin: the
/// catalog fetch, preference persistence, theme loading and worker messaging.
/// The query pipeline itself never fails.
///
/// # Examples
///
/// ```
/// use memeverse::GalleryError;
///
/// fn validate_page_size(size: usize) -> Result<usize, GalleryError> {
///     if size == 0 {
///         return Err(GalleryError::Config("page_size must be positive".to_string()));
///     }
///     Ok(size)
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Preference storage operation failed.
    ///
    /// Occurs when the preference file cannot be read back into a usable shape.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    ///
    /// Covers worker payloads and the preference file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The catalog source answered with something other than a usable catalog.
    ///
    /// Raised for non-success HTTP statuses and for responses whose `success`
    /// flag is false. The string carries the upstream error message when one
    /// was provided.
    #[error("Catalog ingest error: {0}")]
    Ingest(String),
}

/// A specialized `Result` type for MemeVerse operations.
pub type Result<T> = std::result::Result<T, GalleryError>;
