//! Score requirements listed per tier

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

use crate::theme::DEFAULT_TIER_COUNT;

/// Total score requirement of a single tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "total", rename_all = "snake_case")]
pub enum ThresholdBound {
    /// Reached by any total strictly below the value
    Below(i64),
    /// Reached from the value upwards
    AtLeast(i64),
    /// Reached by any total strictly above the value
    Above(i64),
}

impl ThresholdBound {
    pub fn total(&self) -> i64 {
        match *self {
            ThresholdBound::Below(total)
            | ThresholdBound::AtLeast(total)
            | ThresholdBound::Above(total) => total,
        }
    }
}

impl fmt::Display for ThresholdBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThresholdBound::Below(total) => write!(f, "<{}", total),
            ThresholdBound::AtLeast(total) => write!(f, "{}", total),
            ThresholdBound::Above(total) => write!(f, ">{}", total),
        }
    }
}

/// One row of the threshold listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierThreshold {
    pub index: usize,
    pub name: String,
    pub bound: ThresholdBound,
}

impl TierThreshold {
    /// Requirement text, e.g. `"<40"`, `"72"` or `">200"`
    pub fn description(&self) -> String {
        self.bound.to_string()
    }

    /// Minimum qualifying total for interior tiers
    pub fn min_total(&self) -> Option<i64> {
        match self.bound {
            ThresholdBound::AtLeast(total) => Some(total),
            _ => None,
        }
    }
}

impl fmt::Display for TierThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.bound)
    }
}

/// Threshold listing, worst tier first
pub type Thresholds = SmallVec<[TierThreshold; DEFAULT_TIER_COUNT]>;
