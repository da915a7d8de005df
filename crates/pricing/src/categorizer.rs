//! Per-hostel price categorization.
//!
//! This is the pure heart of the engine: given any collection of rooms, group
//! them by owning hostel and derive each hostel's price profile. No I/O, no
//! mutation of inputs, deterministic for a given room set.

use crate::thresholds::TierThresholds;
use catalog::{HostelId, Money, Room};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Derived price profile for one hostel.
///
/// Ephemeral by design: values are computed fresh from the current room set
/// on every invocation and never stored or cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceCategory {
    pub hostel_id: HostelId,
    pub min_price: Money,
    pub max_price: Money,
    pub room_count: usize,
    /// At least one room priced at or above the premium floor
    pub is_premium: bool,
    /// At least one room, and every room strictly below the affordable
    /// ceiling. Never true together with `is_premium`.
    pub is_affordable: bool,
}

impl PriceCategory {
    /// The mid-range rule: not premium, but at least one room at or above
    /// the affordable ceiling.
    ///
    /// Deliberately not the complement of `is_affordable` — a hostel whose
    /// rooms straddle the ceiling (say 500k and 700k) is mid-range, while one
    /// entirely below it is affordable. Both predicates must be kept exactly
    /// as-is or hostels near the boundary vanish from every tier.
    pub fn is_mid_range(&self, thresholds: &TierThresholds) -> bool {
        !self.is_premium
            && (self.min_price >= thresholds.affordable_ceiling
                || self.max_price >= thresholds.affordable_ceiling)
    }
}

/// Groups rooms by hostel and classifies each group against the configured
/// thresholds.
#[derive(Debug, Clone, Default)]
pub struct PriceCategorizer {
    thresholds: TierThresholds,
}

impl PriceCategorizer {
    /// Create a categorizer with the given thresholds.
    pub fn new(thresholds: TierThresholds) -> Self {
        Self { thresholds }
    }

    /// The thresholds this categorizer classifies against.
    pub fn thresholds(&self) -> &TierThresholds {
        &self.thresholds
    }

    /// Categorize a set of rooms into per-hostel price profiles.
    ///
    /// ## Algorithm
    /// 1. Fold rooms into a map keyed by hostel id, tracking min/max/count
    ///    and the two tier flags as each room arrives.
    /// 2. A hostel with zero rooms simply never gets an entry — absence
    ///    means "cannot be categorized", and callers must exclude such
    ///    hostels from every tier.
    ///
    /// Empty input yields an empty map; that is not an error condition.
    pub fn categorize(&self, rooms: &[Room]) -> HashMap<HostelId, PriceCategory> {
        let mut categories: HashMap<HostelId, PriceCategory> = HashMap::new();

        for room in rooms {
            let entry = categories
                .entry(room.hostel_id.clone())
                .or_insert_with(|| PriceCategory {
                    hostel_id: room.hostel_id.clone(),
                    min_price: room.price,
                    max_price: room.price,
                    room_count: 0,
                    is_premium: false,
                    is_affordable: true,
                });

            entry.min_price = entry.min_price.min(room.price);
            entry.max_price = entry.max_price.max(room.price);
            entry.room_count += 1;

            if room.price >= self.thresholds.premium_floor {
                entry.is_premium = true;
            }
            if room.price >= self.thresholds.affordable_ceiling {
                // One room at the ceiling or above disqualifies "affordable"
                entry.is_affordable = false;
            }
        }

        debug!(
            "Categorized {} rooms into {} hostels",
            rooms.len(),
            categories.len()
        );
        categories
    }
}
