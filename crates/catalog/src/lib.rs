//! # Catalog Crate
//!
//! This crate owns the hostel/room domain model and read-only data access.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Hostel, Room, GenderPolicy, RoomType)
//! - **index**: `CatalogIndex`, the in-memory store implementation
//! - **store**: `HostelStore`/`RoomStore` traits and their filter types
//! - **loader**: JSON seed-file loading
//! - **error**: Error types for catalog access
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogIndex, HostelFilter, HostelStore};
//! use std::path::Path;
//!
//! let index = CatalogIndex::load_from_file(Path::new("data/catalog.json"))?;
//!
//! let filter = HostelFilter {
//!     available: Some(true),
//!     location_term: Some("wandegeya".to_string()),
//! };
//! let hostels = index.find_hostels(&filter).await?;
//! ```
//!
//! Everything here is read-oriented: the engine built on top never mutates
//! catalog data, so a single index can serve concurrent searches without
//! coordination.

// Public modules
pub mod error;
pub mod index;
pub mod loader;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use index::CatalogIndex;
pub use store::{HostelFilter, HostelStore, RoomFilter, RoomStore};
pub use types::{GenderPolicy, Hostel, HostelId, HostelImage, Money, Room, RoomId, RoomType};
