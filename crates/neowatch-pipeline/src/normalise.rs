//! Feed flattening.
//!
//! The nested date→objects structure is an external-API artifact; it is
//! abstracted here into a flat record sequence so nothing downstream
//! depends on it. Objects with no close approach for the window are
//! excluded. Objects missing required fields are skipped with a warning,
//! not fatal for the batch.

use chrono::NaiveDate;
use tracing::warn;

use neowatch_common::{FlatRecord, NeowatchError, Result};
use neowatch_ingestion::models::{RawFeed, RawNeo};

const DATE_FMT: &str = "%Y-%m-%d";

/// Flatten a feed payload into records.
///
/// Only the first close-approach entry per object is retained; the feed
/// returns approaches sorted by proximity to the query window, and only
/// the primary event is of interest. Output length is therefore at most
/// `element_count`, and less when objects have no approach or are
/// malformed. Iteration over the date map is ordered, so the same payload
/// always yields the same sequence.
pub fn flatten_feed(feed: &RawFeed) -> Vec<FlatRecord> {
    let mut records = Vec::new();

    for (date, objects) in &feed.near_earth_objects {
        for value in objects {
            match flatten_object(date, value) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {} // no close approach for this window
                Err(e) => warn!(date = %date, error = %e, "skipping malformed feed object"),
            }
        }
    }

    records
}

/// Flatten one raw object. `Ok(None)` means the object has no
/// close-approach entry and contributes nothing.
fn flatten_object(date: &str, value: &serde_json::Value) -> Result<Option<FlatRecord>> {
    let neo: RawNeo = serde_json::from_value(value.clone())
        .map_err(|e| NeowatchError::MalformedRecord(e.to_string()))?;

    let Some(approach) = neo.close_approach_data.first() else {
        return Ok(None);
    };

    let observation_date = parse_date(date)?;
    let close_approach_date = parse_date(&approach.close_approach_date)?;
    let miss_distance_km = parse_f64("miss_distance.kilometers", &approach.miss_distance.kilometers)?;
    let relative_velocity_kph = parse_f64(
        "relative_velocity.kilometers_per_hour",
        &approach.relative_velocity.kilometers_per_hour,
    )?;

    let diameter_min_km = neo.estimated_diameter.kilometers.estimated_diameter_min;
    let diameter_max_km = neo.estimated_diameter.kilometers.estimated_diameter_max;

    Ok(Some(FlatRecord {
        id: neo.id,
        name: neo.name,
        observation_date,
        diameter_min_km,
        diameter_max_km,
        avg_diameter_km: (diameter_min_km + diameter_max_km) / 2.0,
        is_hazardous: neo.is_potentially_hazardous_asteroid,
        close_approach_date,
        miss_distance_km,
        relative_velocity_kph,
    }))
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FMT)
        .map_err(|e| NeowatchError::MalformedRecord(format!("bad date {raw:?}: {e}")))
}

fn parse_f64(field: &str, raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| NeowatchError::MalformedRecord(format!("non-numeric {field}: {raw:?}")))
}
