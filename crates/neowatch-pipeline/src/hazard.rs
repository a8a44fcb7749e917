//! Relative hazard scoring.
//!
//! A bounded 0–100 score from size and miss distance. Only objects the
//! upstream service flags as potentially hazardous score above zero; the
//! score ranks them against each other, it is not an absolute risk
//! probability.

use serde::{Deserialize, Serialize};

use neowatch_common::FlatRecord;

/// Diameter at which the size factor saturates.
const SIZE_SATURATION_KM: f64 = 0.5;
/// Miss distance at which the proximity factor saturates.
const DISTANCE_SATURATION_KM: f64 = 1_000_000.0;

const SIZE_WEIGHT: f64 = 0.7;
const DISTANCE_WEIGHT: f64 = 0.3;

const HIGH_THRESHOLD: f64 = 70.0;
const MEDIUM_THRESHOLD: f64 = 40.0;

/// Coarse bucket derived from the continuous score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardTier {
    Low,
    Medium,
    High,
}

impl HazardTier {
    pub fn from_value(value: f64) -> Self {
        if value > HIGH_THRESHOLD {
            HazardTier::High
        } else if value > MEDIUM_THRESHOLD {
            HazardTier::Medium
        } else {
            HazardTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HazardTier::Low    => "low",
            HazardTier::Medium => "medium",
            HazardTier::High   => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardScore {
    pub value: f64,
    pub tier: HazardTier,
}

/// Score one record.
///
/// ```text
/// size_factor     = min(avg_diameter_km / 0.5, 1.0)
/// distance_factor = min(1_000_000 / miss_distance_km, 1.0)
/// value           = (size_factor * 0.7 + distance_factor * 0.3) * 100
/// ```
///
/// A zero (or negative) miss distance saturates the proximity factor at
/// 1.0 like any very small distance; it never divides to infinity.
pub fn score(record: &FlatRecord) -> HazardScore {
    if !record.is_hazardous {
        return HazardScore { value: 0.0, tier: HazardTier::Low };
    }

    let size_factor = (record.avg_diameter_km / SIZE_SATURATION_KM).min(1.0);
    let distance_factor = if record.miss_distance_km <= 0.0 {
        1.0
    } else {
        (DISTANCE_SATURATION_KM / record.miss_distance_km).min(1.0)
    };

    let value = (size_factor * SIZE_WEIGHT + distance_factor * DISTANCE_WEIGHT) * 100.0;
    HazardScore { value, tier: HazardTier::from_value(value) }
}
