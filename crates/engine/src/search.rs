//! # Search Engine
//!
//! This module coordinates the whole search pipeline:
//! 1. Validate criteria (reject an all-empty query before any I/O)
//! 2. One hostel read (availability + location/name substring)
//! 3. One batched room read over the matched hostel id set
//! 4. Group surviving rooms by hostel
//! 5. Shape result entries (summary, primary image, rooms, price range)
//! 6. Stable sort ascending by entry min price
//!
//! It also exposes the three catalog tier listings, which reuse the same two
//! store reads plus the pure categorizer.
//!
//! The engine is stateless between calls: each invocation reads a snapshot,
//! computes, and returns. Concurrent searches share nothing mutable.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument};

use catalog::{Hostel, HostelFilter, HostelId, HostelStore, Room, RoomFilter, RoomStore};
use pricing::{PriceCategorizer, Tier};

use crate::criteria::SearchCriteria;
use crate::error::{Result, SearchError};
use crate::results::{EmptyReason, PriceRange, SearchEntry, SearchOutcome, SearchResults};

/// Which hostels the tier listings consider.
///
/// The flexible search path only ever sees available hostels, but the tier
/// listings historically query the whole catalog without re-checking
/// availability. That asymmetry is preserved as the default here rather than
/// silently "fixed"; set `respect_availability` to true to align the two
/// paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct TierScope {
    pub respect_availability: bool,
}

/// Main entry point: composes store reads, room filtering, grouping and
/// categorization into search results and tier listings.
pub struct SearchEngine {
    hostel_store: Arc<dyn HostelStore>,
    room_store: Arc<dyn RoomStore>,
    categorizer: PriceCategorizer,
    tier_scope: TierScope,
}

impl SearchEngine {
    /// Create an engine over the given stores with default thresholds.
    pub fn new(hostel_store: Arc<dyn HostelStore>, room_store: Arc<dyn RoomStore>) -> Self {
        Self {
            hostel_store,
            room_store,
            categorizer: PriceCategorizer::default(),
            tier_scope: TierScope::default(),
        }
    }

    /// Replace the categorizer (custom tier thresholds).
    pub fn with_categorizer(mut self, categorizer: PriceCategorizer) -> Self {
        self.categorizer = categorizer;
        self
    }

    /// Configure how tier listings treat unavailable hostels.
    pub fn with_tier_scope(mut self, scope: TierScope) -> Self {
        self.tier_scope = scope;
        self
    }

    /// Run a search.
    ///
    /// # Returns
    /// * `Ok(SearchOutcome::Matches)` - at least one hostel with surviving rooms
    /// * `Ok(SearchOutcome::Empty)` - a legitimate zero-result search
    /// * `Err(SearchError::InvalidCriteria)` - no criteria supplied at all
    /// * `Err(SearchError::Store)` - a store read failed
    #[instrument(skip(self, criteria))]
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<SearchOutcome> {
        let start_time = Instant::now();

        // Reject before any store read
        if criteria.is_empty() {
            return Err(SearchError::InvalidCriteria);
        }
        let applied = criteria.applied();

        // Single hostel read
        let hostels = self.find_matching_hostels(criteria).await?;
        info!("Matched {} hostels for criteria {:?}", hostels.len(), applied);
        if hostels.is_empty() {
            return Ok(SearchOutcome::Empty {
                reason: EmptyReason::NoHostelsMatched,
                criteria_applied: applied,
            });
        }

        // Single batched room read over the matched hostel id set (no N+1)
        let rooms = self.find_matching_rooms(criteria, &hostels).await?;
        info!("{} rooms survive the room filters", rooms.len());
        if rooms.is_empty() {
            return Ok(SearchOutcome::Empty {
                reason: EmptyReason::NoRoomsMatched,
                criteria_applied: applied,
            });
        }

        // Group, shape, sort
        let entries = self.shape_entries(hostels, rooms);
        info!(
            "Search produced {} entries in {:.2?}",
            entries.len(),
            start_time.elapsed()
        );

        Ok(SearchOutcome::Matches(SearchResults {
            count: entries.len(),
            criteria_applied: applied,
            entries,
        }))
    }

    /// List every hostel in a tier across the whole catalog.
    ///
    /// Empty tiers are a successful empty list, never an error. Availability
    /// is only checked when the configured [`TierScope`] says so.
    #[instrument(skip(self))]
    pub async fn list_tier(&self, tier: Tier) -> Result<Vec<Hostel>> {
        let hostel_filter = HostelFilter {
            available: self.tier_scope.respect_availability.then_some(true),
            location_term: None,
        };
        let hostels = self.hostel_store.find_hostels(&hostel_filter).await?;
        if hostels.is_empty() {
            return Ok(Vec::new());
        }

        let mut rooms = self.room_store.find_rooms(&RoomFilter::default()).await?;

        // Orphaned rooms reference hostels the catalog no longer knows;
        // drop them instead of erroring.
        let known: HashSet<&HostelId> = hostels.iter().map(|h| &h.id).collect();
        let before = rooms.len();
        rooms.retain(|room| known.contains(&room.hostel_id));
        if rooms.len() < before {
            debug!("Dropped {} orphaned rooms", before - rooms.len());
        }

        let categories = self.categorizer.categorize(&rooms);
        let thresholds = self.categorizer.thresholds();

        // Hostels absent from the category map have no rooms and belong to
        // no tier.
        let members: Vec<Hostel> = hostels
            .into_iter()
            .filter(|hostel| {
                categories
                    .get(&hostel.id)
                    .is_some_and(|category| tier.contains(category, thresholds))
            })
            .collect();

        info!("Tier '{}' holds {} hostels", tier, members.len());
        Ok(members)
    }

    /// Hostels with at least one room at or above the premium floor.
    pub async fn list_premium(&self) -> Result<Vec<Hostel>> {
        self.list_tier(Tier::Premium).await
    }

    /// Hostels whose every room sits below the affordable ceiling.
    pub async fn list_affordable(&self) -> Result<Vec<Hostel>> {
        self.list_tier(Tier::Affordable).await
    }

    /// Hostels between the two boundaries (see `PriceCategory::is_mid_range`).
    pub async fn list_mid_range(&self) -> Result<Vec<Hostel>> {
        self.list_tier(Tier::MidRange).await
    }

    /// Step 1: available hostels matching the location term, if any.
    async fn find_matching_hostels(&self, criteria: &SearchCriteria) -> Result<Vec<Hostel>> {
        let filter = HostelFilter {
            available: Some(true),
            location_term: criteria.location_term().map(str::to_string),
        };
        Ok(self.hostel_store.find_hostels(&filter).await?)
    }

    /// Step 3: rooms of the matched hostels passing type and price filters.
    async fn find_matching_rooms(
        &self,
        criteria: &SearchCriteria,
        hostels: &[Hostel],
    ) -> Result<Vec<Room>> {
        let ids: HashSet<HostelId> = hostels.iter().map(|h| h.id.clone()).collect();
        let filter = RoomFilter {
            hostel_ids: Some(ids),
            room_type_term: criteria.room_type_term().map(str::to_string),
            min_price: criteria.min_price,
            max_price: criteria.max_price,
        };
        Ok(self.room_store.find_rooms(&filter).await?)
    }

    /// Steps 5-7: group rooms under their hostel, shape each entry, and sort
    /// ascending by the entry's min price.
    ///
    /// Grouping goes through a fresh map per call — nothing is accumulated
    /// across requests. Hostels are visited in store-read order and the sort
    /// is stable, so equal-price entries keep that relative order.
    fn shape_entries(&self, hostels: Vec<Hostel>, rooms: Vec<Room>) -> Vec<SearchEntry> {
        let mut rooms_by_hostel: HashMap<HostelId, Vec<Room>> = HashMap::new();
        for room in rooms {
            rooms_by_hostel
                .entry(room.hostel_id.clone())
                .or_default()
                .push(room);
        }

        let mut entries: Vec<SearchEntry> = hostels
            .iter()
            .filter_map(|hostel| {
                let rooms = rooms_by_hostel.remove(&hostel.id)?;
                // Grouping only creates non-empty buckets, so the range
                // always exists here.
                let price_range = PriceRange::over(&rooms)?;
                Some(SearchEntry {
                    hostel: hostel.into(),
                    primary_image: hostel.primary_image().map(|img| img.url.clone()),
                    rooms,
                    price_range,
                })
            })
            .collect();

        entries.sort_by_key(|entry| entry.price_range.min);
        entries
    }
}
