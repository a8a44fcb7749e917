//! Corpus-level summary metrics.

use serde::{Deserialize, Serialize};

use neowatch_common::{FlatRecord, NeowatchError, Result};

/// Read-only summary over the currently active record set. Recomputed
/// whenever the selection changes; never cached across selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub total: usize,
    pub hazardous_count: usize,
    pub hazardous_pct: f64,
    pub mean_avg_diameter_km: f64,
}

impl Aggregate {
    /// Compute summary metrics over a record set.
    ///
    /// An empty set has no defined percentage or mean, so it is reported
    /// as [`NeowatchError::EmptyCorpus`] rather than a NaN that would
    /// leak into presentation.
    pub fn compute(records: &[FlatRecord]) -> Result<Aggregate> {
        if records.is_empty() {
            return Err(NeowatchError::EmptyCorpus);
        }

        let total = records.len();
        let hazardous_count = records.iter().filter(|r| r.is_hazardous).count();
        let diameter_sum: f64 = records.iter().map(|r| r.avg_diameter_km).sum();

        Ok(Aggregate {
            total,
            hazardous_count,
            hazardous_pct: hazardous_count as f64 / total as f64 * 100.0,
            mean_avg_diameter_km: diameter_sum / total as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(avg_diameter_km: f64, is_hazardous: bool) -> FlatRecord {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        FlatRecord {
            id: "1".to_string(),
            name: "Rock".to_string(),
            observation_date: date,
            diameter_min_km: avg_diameter_km,
            diameter_max_km: avg_diameter_km,
            avg_diameter_km,
            is_hazardous,
            close_approach_date: date,
            miss_distance_km: 500_000.0,
            relative_velocity_kph: 40_000.0,
        }
    }

    #[test]
    fn test_aggregate_over_mixed_set() {
        let records = vec![record(0.2, true), record(0.4, false), record(0.6, true)];
        let agg = Aggregate::compute(&records).unwrap();
        assert_eq!(agg.total, 3);
        assert_eq!(agg.hazardous_count, 2);
        assert!((agg.hazardous_pct - 200.0 / 3.0).abs() < 1e-9);
        assert!((agg.mean_avg_diameter_km - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_all_hazardous() {
        let records = vec![record(0.2, true)];
        let agg = Aggregate::compute(&records).unwrap();
        assert!((agg.hazardous_pct - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_set_is_an_explicit_error() {
        let err = Aggregate::compute(&[]).unwrap_err();
        assert!(matches!(err, NeowatchError::EmptyCorpus));
    }
}
