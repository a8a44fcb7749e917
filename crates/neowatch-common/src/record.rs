/// Flattened close-approach records, the unit every downstream
/// component (metrics, scoring, selection) operates on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One near-Earth object with its primary close approach for the query
/// window. Built once by the normalizer and never mutated afterwards;
/// selection works on clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRecord {
    /// Upstream object identifier (opaque string, e.g. "3542519").
    pub id: String,
    pub name: String,
    /// The feed grouping date: which day of the window this object was
    /// listed under. Distinct from `close_approach_date`.
    pub observation_date: NaiveDate,
    pub diameter_min_km: f64,
    pub diameter_max_km: f64,
    /// Midpoint of the estimated diameter bounds, attached at
    /// normalization time.
    pub avg_diameter_km: f64,
    pub is_hazardous: bool,
    pub close_approach_date: NaiveDate,
    pub miss_distance_km: f64,
    pub relative_velocity_kph: f64,
}
