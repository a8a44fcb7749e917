//! Data models mirroring the NeoWs feed JSON contract.
//!
//! The feed groups objects under their calendar date. Per-object entries
//! are kept as raw JSON at the collection level so that one malformed
//! object can be skipped during flattening without failing the whole
//! payload decode; individually they deserialize into [`RawNeo`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full feed payload for one query window.
///
/// `near_earth_objects` is a `BTreeMap` so iteration is date-ascending
/// regardless of upstream JSON key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFeed {
    pub element_count: u64,
    pub near_earth_objects: BTreeMap<String, Vec<serde_json::Value>>,
}

/// One object's upstream representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNeo {
    pub id: String,
    pub name: String,
    pub estimated_diameter: EstimatedDiameter,
    pub is_potentially_hazardous_asteroid: bool,
    /// Approaches sorted by proximity to the query window; may be empty,
    /// in which case the object has no observable event for this window.
    #[serde(default)]
    pub close_approach_data: Vec<RawCloseApproach>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    pub kilometers: DiameterRangeKm,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiameterRangeKm {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

/// One close-approach event. The numeric leaves arrive as JSON strings
/// (upstream contract) and are parsed to `f64` during flattening.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCloseApproach {
    pub close_approach_date: String,
    pub relative_velocity: RelativeVelocity,
    pub miss_distance: MissDistance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelativeVelocity {
    pub kilometers_per_hour: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissDistance {
    pub kilometers: String,
}
