//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or reading catalog data.
///
/// Store reads surface `Unavailable` and nothing else: a query that matches
/// zero records is a successful empty result, never an error.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Seed file could not be found or opened
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a seed file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Seed file exists but is not valid catalog JSON
    #[error("Malformed catalog data in {path}: {reason}")]
    Malformed { path: String, reason: String },

    /// The backing store could not serve a read (connectivity etc.).
    /// Propagated to callers as-is; the engine never retries or masks it.
    #[error("Catalog store unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
