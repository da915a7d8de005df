//! Tier boundary configuration.
//!
//! The affordable/premium boundaries are configuration injected into the
//! categorizer rather than literals scattered across the tier definitions,
//! so the three tiers can never drift apart.

use catalog::Money;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default affordable ceiling: every room strictly below this is "cheap".
pub const DEFAULT_AFFORDABLE_CEILING: Money = 600_000;

/// Default premium floor: any room at or above this makes a hostel premium.
pub const DEFAULT_PREMIUM_FLOOR: Money = 1_000_000;

/// The two price boundaries that drive tier classification.
///
/// * `affordable_ceiling` is an exclusive upper bound: a hostel is
///   affordable only if every room is priced strictly below it.
/// * `premium_floor` is an inclusive lower bound: one room at or above it
///   makes the hostel premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThresholds {
    pub affordable_ceiling: Money,
    pub premium_floor: Money,
}

/// Error for nonsensical threshold combinations.
#[derive(Error, Debug)]
#[error("affordable ceiling {ceiling} must be below premium floor {floor}")]
pub struct InvalidThresholds {
    pub ceiling: Money,
    pub floor: Money,
}

impl TierThresholds {
    /// Build a validated set of thresholds.
    ///
    /// The ceiling must sit strictly below the floor; otherwise "affordable"
    /// and "premium" could overlap and the mid-range band would vanish.
    pub fn new(affordable_ceiling: Money, premium_floor: Money) -> Result<Self, InvalidThresholds> {
        if affordable_ceiling >= premium_floor {
            return Err(InvalidThresholds {
                ceiling: affordable_ceiling,
                floor: premium_floor,
            });
        }
        Ok(Self {
            affordable_ceiling,
            premium_floor,
        })
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            affordable_ceiling: DEFAULT_AFFORDABLE_CEILING,
            premium_floor: DEFAULT_PREMIUM_FLOOR,
        }
    }
}
