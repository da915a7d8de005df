//! Error types for the search engine.
//!
//! The taxonomy is deliberately small. Callers must be able to distinguish
//! three situations: a malformed query (rejected before any store read), a
//! backend failure (propagated, never retried), and zero results — which is
//! not an error at all and never appears here.

use catalog::CatalogError;
use thiserror::Error;

/// Errors a search or tier listing can fail with.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The caller supplied no criteria at all. Rejected up front; no store
    /// read is issued.
    #[error("At least one search criterion must be supplied")]
    InvalidCriteria,

    /// An underlying store read failed. Surfaced as-is.
    #[error("Store read failed: {0}")]
    Store(#[from] CatalogError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SearchError>;
