//! Tier membership.

use crate::categorizer::PriceCategory;
use crate::thresholds::TierThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A price-based classification bucket for a hostel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Affordable,
    MidRange,
    Premium,
}

impl Tier {
    /// Whether a categorized hostel belongs to this tier.
    ///
    /// Affordable and mid-range are not complements: a hostel can satisfy
    /// neither (e.g. single room exactly at the premium floor belongs only to
    /// premium) and membership must be evaluated per tier, never derived by
    /// negation.
    pub fn contains(&self, category: &PriceCategory, thresholds: &TierThresholds) -> bool {
        match self {
            Tier::Premium => category.is_premium,
            Tier::Affordable => category.is_affordable,
            Tier::MidRange => category.is_mid_range(thresholds),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Affordable => "affordable",
            Tier::MidRange => "mid-range",
            Tier::Premium => "premium",
        };
        write!(f, "{label}")
    }
}
