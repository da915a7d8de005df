//! Store traits: the read-only seam between the engine and its data.
//!
//! The engine never touches a database directly; it issues at most one
//! hostel read and one room read per invocation through these traits. The
//! in-memory `CatalogIndex` implements both, and a database-backed store can
//! be substituted without the engine noticing.

use crate::error::Result;
use crate::index::CatalogIndex;
use crate::types::{Hostel, HostelId, Money, Room};
use async_trait::async_trait;
use std::collections::HashSet;

/// Filter for hostel reads.
///
/// An unset field is unconstrained. The location term matches the hostel's
/// location OR name as a case-insensitive, unanchored substring.
#[derive(Debug, Clone, Default)]
pub struct HostelFilter {
    pub available: Option<bool>,
    pub location_term: Option<String>,
}

impl HostelFilter {
    /// Whether a hostel satisfies every supplied constraint.
    pub fn matches(&self, hostel: &Hostel) -> bool {
        let available_ok = self.available.is_none_or(|want| hostel.available == want);

        let location_ok = self.location_term.as_ref().is_none_or(|term| {
            let needle = term.to_lowercase();
            hostel.location.to_lowercase().contains(&needle)
                || hostel.name.to_lowercase().contains(&needle)
        });

        available_ok && location_ok
    }
}

/// Filter for room reads.
///
/// `hostel_ids` restricts the read to rooms owned by that id set (the
/// batched lookup the engine uses to avoid N+1 reads). Price bounds are
/// inclusive on each side that is supplied.
#[derive(Debug, Clone, Default)]
pub struct RoomFilter {
    pub hostel_ids: Option<HashSet<HostelId>>,
    pub room_type_term: Option<String>,
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
}

impl RoomFilter {
    /// Whether a room satisfies every supplied constraint.
    pub fn matches(&self, room: &Room) -> bool {
        let hostel_ok = self
            .hostel_ids
            .as_ref()
            .is_none_or(|ids| ids.contains(&room.hostel_id));

        let type_ok = self.room_type_term.as_ref().is_none_or(|term| {
            room.room_type.label().contains(&term.to_lowercase())
        });

        let min_ok = self.min_price.is_none_or(|min| room.price >= min);
        let max_ok = self.max_price.is_none_or(|max| room.price <= max);

        hostel_ok && type_ok && min_ok && max_ok
    }
}

/// Read-only access to hostel records.
#[async_trait]
pub trait HostelStore: Send + Sync {
    /// Fetch all hostels matching the filter. Zero matches is a successful
    /// empty result; `Err` means the store itself could not serve the read.
    async fn find_hostels(&self, filter: &HostelFilter) -> Result<Vec<Hostel>>;
}

/// Read-only access to room records.
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Fetch all rooms matching the filter. Same error contract as
    /// [`HostelStore::find_hostels`].
    async fn find_rooms(&self, filter: &RoomFilter) -> Result<Vec<Room>>;
}

#[async_trait]
impl HostelStore for CatalogIndex {
    async fn find_hostels(&self, filter: &HostelFilter) -> Result<Vec<Hostel>> {
        Ok(self
            .hostels()
            .filter(|h| filter.matches(h))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RoomStore for CatalogIndex {
    async fn find_rooms(&self, filter: &RoomFilter) -> Result<Vec<Room>> {
        Ok(self
            .rooms()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }
}
