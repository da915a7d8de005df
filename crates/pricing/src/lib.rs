//! # Pricing Crate
//!
//! Pure price-categorization logic: grouping rooms by hostel, computing
//! per-hostel price ranges, and classifying hostels into price tiers.
//!
//! ## Components
//!
//! - **thresholds**: `TierThresholds`, the injected affordable/premium
//!   boundaries (no literals at classification sites)
//! - **categorizer**: `PriceCategorizer`, rooms in, per-hostel
//!   `PriceCategory` map out
//! - **tier**: the `Tier` enum and its membership rules
//!
//! ## Example Usage
//!
//! ```ignore
//! use pricing::{PriceCategorizer, Tier, TierThresholds};
//!
//! let categorizer = PriceCategorizer::new(TierThresholds::default());
//! let categories = categorizer.categorize(&rooms);
//!
//! let premium: Vec<_> = categories
//!     .values()
//!     .filter(|c| Tier::Premium.contains(c, categorizer.thresholds()))
//!     .collect();
//! ```
//!
//! Everything in this crate is a pure function of its inputs — no I/O, no
//! shared state, safe to call from concurrent requests.

pub mod categorizer;
pub mod thresholds;
pub mod tier;

// Re-export main types
pub use categorizer::{PriceCategorizer, PriceCategory};
pub use thresholds::{InvalidThresholds, TierThresholds};
pub use tier::Tier;
