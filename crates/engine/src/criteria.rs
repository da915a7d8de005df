//! Search criteria: validation and normalization.

use catalog::Money;
use serde::{Deserialize, Serialize};

/// Sentinel reported for a criteria field the caller left unconstrained.
pub const UNCONSTRAINED: &str = "unconstrained";

/// Caller-supplied search parameters. Every field is optional, but a search
/// with all four absent is rejected with `InvalidCriteria`.
///
/// String fields are treated as absent when empty or whitespace-only, so a
/// form submitting `location=""` behaves the same as omitting the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Substring matched case-insensitively against hostel location OR name
    pub location: Option<String>,
    /// Substring matched case-insensitively against the room type label
    pub room_type: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<Money>,
    /// Inclusive upper price bound
    pub max_price: Option<Money>,
}

impl SearchCriteria {
    /// The location term actually in effect, trimmed; `None` if blank.
    pub fn location_term(&self) -> Option<&str> {
        normalize(self.location.as_deref())
    }

    /// The room-type term actually in effect, trimmed; `None` if blank.
    pub fn room_type_term(&self) -> Option<&str> {
        normalize(self.room_type.as_deref())
    }

    /// True when no field carries a usable constraint.
    pub fn is_empty(&self) -> bool {
        self.location_term().is_none()
            && self.room_type_term().is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Echo of the criteria as applied: each field resolved to the literal
    /// value used, or the `UNCONSTRAINED` sentinel.
    pub fn applied(&self) -> AppliedCriteria {
        AppliedCriteria {
            location: echo_str(self.location_term()),
            room_type: echo_str(self.room_type_term()),
            min_price: echo_num(self.min_price),
            max_price: echo_num(self.max_price),
        }
    }
}

/// Normalized criteria echoed back with every search outcome so callers can
/// see exactly which constraints were applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedCriteria {
    pub location: String,
    pub room_type: String,
    pub min_price: String,
    pub max_price: String,
}

fn normalize(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn echo_str(value: Option<&str>) -> String {
    value.map_or_else(|| UNCONSTRAINED.to_string(), str::to_string)
}

fn echo_num(value: Option<Money>) -> String {
    value.map_or_else(|| UNCONSTRAINED.to_string(), |n| n.to_string())
}
