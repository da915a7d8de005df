//! Core domain types for the hostel catalog.
//!
//! This module defines the read-only projections the search engine works
//! with: hostels, their rooms, and the image entries attached to a hostel.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up hostel and room ids.

/// Unique identifier for a hostel (document id from the backing store)
pub type HostelId = String;

/// Unique identifier for a room
pub type RoomId = String;

/// A price in the smallest denomination of the base currency.
///
/// Unsigned on purpose: a negative price is unrepresentable, so the
/// "price >= 0" invariant holds by construction. A price of 0 is valid.
pub type Money = u64;

// =============================================================================
// Hostel-related Types
// =============================================================================

/// Read-only projection of a hostel record used by search and tiering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostel {
    pub id: HostelId,
    pub name: String,
    /// Free-text location, e.g. "Wandegeya, Kampala"
    pub location: String,
    pub gender: GenderPolicy,
    /// Hostels with `available = false` are excluded from every search path
    pub available: bool,
    /// Ordered list of amenity labels
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<HostelImage>,
    /// Informational flag only; never affects filtering or tiering
    #[serde(default)]
    pub featured: bool,
}

impl Hostel {
    /// The representative thumbnail: the first image marked primary,
    /// falling back to the first entry, else none.
    pub fn primary_image(&self) -> Option<&HostelImage> {
        self.images
            .iter()
            .find(|img| img.is_primary)
            .or_else(|| self.images.first())
    }
}

/// One entry in a hostel's image list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostelImage {
    pub url: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// Who a hostel (or room) admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderPolicy {
    Male,
    Female,
    Mixed,
}

// =============================================================================
// Room-related Types
// =============================================================================

/// A bookable room. Every room belongs to exactly one hostel via `hostel_id`;
/// rooms referencing a hostel the catalog does not know are kept in the store
/// but silently dropped by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub hostel_id: HostelId,
    pub room_type: RoomType,
    pub gender: GenderPolicy,
    /// Price per period in smallest currency units
    pub price: Money,
    pub max_occupancy: u32,
}

/// The fixed set of room layouts offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
    Shared,
}

impl RoomType {
    /// Lowercase label used for substring matching of caller-supplied
    /// room-type criteria.
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Single => "single",
            RoomType::Double => "double",
            RoomType::Shared => "shared",
        }
    }
}
