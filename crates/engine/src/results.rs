//! Result shaping for search responses.

use crate::criteria::AppliedCriteria;
use catalog::{GenderPolicy, Hostel, HostelId, Money, Room};
use serde::Serialize;
use std::fmt;

/// The hostel fields exposed in a search result entry.
#[derive(Debug, Clone, Serialize)]
pub struct HostelSummary {
    pub id: HostelId,
    pub name: String,
    pub location: String,
    pub gender: GenderPolicy,
    pub amenities: Vec<String>,
    pub featured: bool,
}

impl From<&Hostel> for HostelSummary {
    fn from(hostel: &Hostel) -> Self {
        Self {
            id: hostel.id.clone(),
            name: hostel.name.clone(),
            location: hostel.location.clone(),
            gender: hostel.gender,
            amenities: hostel.amenities.clone(),
            featured: hostel.featured,
        }
    }
}

/// Min/max over the surviving rooms of one entry — not over all of the
/// hostel's rooms, only those matching the current search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Range over a non-empty room slice. `None` when the slice is empty.
    pub fn over(rooms: &[Room]) -> Option<Self> {
        let first = rooms.first()?;
        let mut range = PriceRange {
            min: first.price,
            max: first.price,
        };
        for room in &rooms[1..] {
            range.min = range.min.min(room.price);
            range.max = range.max.max(room.price);
        }
        Some(range)
    }
}

/// One hostel in a search result, with its surviving rooms.
#[derive(Debug, Clone, Serialize)]
pub struct SearchEntry {
    pub hostel: HostelSummary,
    /// Url of the representative image, if the hostel has any images
    pub primary_image: Option<String>,
    pub rooms: Vec<Room>,
    pub price_range: PriceRange,
}

/// A non-empty search result set.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub criteria_applied: AppliedCriteria,
    pub entries: Vec<SearchEntry>,
}

/// Why a search legitimately produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    NoHostelsMatched,
    NoRoomsMatched,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            EmptyReason::NoHostelsMatched => "no hostels in that location",
            EmptyReason::NoRoomsMatched => "no rooms matched the given filters",
        };
        write!(f, "{msg}")
    }
}

/// Outcome of a valid search: either matches, or a described empty set.
/// Both are success values — errors travel through `SearchError` instead.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    Matches(SearchResults),
    Empty {
        reason: EmptyReason,
        criteria_applied: AppliedCriteria,
    },
}

impl SearchOutcome {
    /// Number of hostels in the result set (0 for the empty outcome).
    pub fn count(&self) -> usize {
        match self {
            SearchOutcome::Matches(results) => results.count,
            SearchOutcome::Empty { .. } => 0,
        }
    }

    /// The result entries, empty for the empty outcome.
    pub fn entries(&self) -> &[SearchEntry] {
        match self {
            SearchOutcome::Matches(results) => &results.entries,
            SearchOutcome::Empty { .. } => &[],
        }
    }
}
