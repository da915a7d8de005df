//! # Engine Crate
//!
//! The search composer and catalog tier listings: the public entry points of
//! the hostel search engine.
//!
//! ## Components
//!
//! - **criteria**: `SearchCriteria` validation/normalization and the
//!   applied-criteria echo
//! - **search**: `SearchEngine`, orchestrating the two store reads, room
//!   filtering, grouping, shaping and sorting; also the tier listings
//! - **results**: result shapes (`SearchOutcome`, `SearchEntry`, ...)
//! - **error**: `SearchError` taxonomy
//!
//! ## Example Usage
//!
//! ```ignore
//! use engine::{SearchCriteria, SearchEngine};
//! use std::sync::Arc;
//!
//! let index = Arc::new(catalog::CatalogIndex::load_from_file(path)?);
//! let engine = SearchEngine::new(index.clone(), index);
//!
//! let outcome = engine
//!     .search(&SearchCriteria {
//!         location: Some("wandegeya".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! println!("{} hostels", outcome.count());
//! ```
//!
//! Callers can distinguish three shapes: a populated outcome, a described
//! empty outcome (still `Ok`), and a `SearchError` for malformed queries or
//! store failures. The engine paginates nothing and caches nothing; every
//! call recomputes from a fresh snapshot.

pub mod criteria;
pub mod error;
pub mod results;
pub mod search;

// Re-export main types
pub use criteria::{AppliedCriteria, SearchCriteria, UNCONSTRAINED};
pub use error::SearchError;
pub use results::{EmptyReason, HostelSummary, PriceRange, SearchEntry, SearchOutcome, SearchResults};
pub use search::{SearchEngine, TierScope};
