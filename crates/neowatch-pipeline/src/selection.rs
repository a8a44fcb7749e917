//! Interactive record selection: filters plus a sort specification.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use neowatch_common::FlatRecord;

/// Which record field a selection sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    ApproachDate,
    Name,
    AvgDiameter,
    MissDistance,
    RelativeVelocity,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::ApproachDate     => "approach-date",
            SortKey::Name             => "name",
            SortKey::AvgDiameter      => "avg-diameter",
            SortKey::MissDistance     => "miss-distance",
            SortKey::RelativeVelocity => "relative-velocity",
        }
    }
}

/// The user's current filter/sort choices. Owned by the presentation
/// layer; the engine reads it and never mutates the input records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub hazardous_only: bool,
    pub min_size_km: f64,
    pub sort_key: SortKey,
    pub ascending: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            hazardous_only: false,
            min_size_km: 0.0,
            sort_key: SortKey::ApproachDate,
            ascending: true,
        }
    }
}

impl SelectionState {
    /// Filter and sort a record set into a new vector.
    ///
    /// The two filter predicates are independent; applying them in either
    /// order yields the same set. The sort is stable, so records with
    /// equal keys keep their pre-sort relative order and repeated queries
    /// over identical input reproduce the same ordering.
    pub fn apply(&self, records: &[FlatRecord]) -> Vec<FlatRecord> {
        let mut selected: Vec<FlatRecord> = records
            .iter()
            .filter(|r| !self.hazardous_only || r.is_hazardous)
            .filter(|r| r.avg_diameter_km >= self.min_size_km)
            .cloned()
            .collect();

        selected.sort_by(|a, b| {
            let ord = compare_by(self.sort_key, a, b);
            if self.ascending { ord } else { ord.reverse() }
        });

        selected
    }
}

fn compare_by(key: SortKey, a: &FlatRecord, b: &FlatRecord) -> Ordering {
    match key {
        SortKey::ApproachDate => a.close_approach_date.cmp(&b.close_approach_date),
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::AvgDiameter => float_cmp(a.avg_diameter_km, b.avg_diameter_km),
        SortKey::MissDistance => float_cmp(a.miss_distance_km, b.miss_distance_km),
        SortKey::RelativeVelocity => float_cmp(a.relative_velocity_kph, b.relative_velocity_kph),
    }
}

fn float_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, name: &str, avg_diameter_km: f64, is_hazardous: bool) -> FlatRecord {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        FlatRecord {
            id: id.to_string(),
            name: name.to_string(),
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
    fn test_hazardous_only_filter() {
        let records = vec![
            record("1", "A", 0.2, true),
            record("2", "B", 0.3, false),
        ];
        let state = SelectionState { hazardous_only: true, ..Default::default() };
        let selected = state.apply(&records);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "1");
    }

    #[test]
    fn test_min_size_filter() {
        let records = vec![
            record("1", "A", 0.05, false),
            record("2", "B", 0.30, false),
        ];
        let state = SelectionState { min_size_km: 0.1, ..Default::default() };
        let selected = state.apply(&records);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "2");
    }

    #[test]
    fn test_size_filter_is_inclusive() {
        let records = vec![record("1", "A", 0.1, false)];
        let state = SelectionState { min_size_km: 0.1, ..Default::default() };
        assert_eq!(state.apply(&records).len(), 1);
    }

    #[test]
    fn test_sort_by_name_descending() {
        let records = vec![
            record("1", "Apophis", 0.3, true),
            record("2", "Bennu", 0.5, true),
        ];
        let state = SelectionState {
            sort_key: SortKey::Name,
            ascending: false,
            ..Default::default()
        };
        let selected = state.apply(&records);
        assert_eq!(selected[0].name, "Bennu");
        assert_eq!(selected[1].name, "Apophis");
    }

    #[test]
    fn test_sort_by_diameter() {
        let records = vec![
            record("1", "A", 0.5, true),
            record("2", "B", 0.1, true),
            record("3", "C", 0.3, true),
        ];
        let state = SelectionState { sort_key: SortKey::AvgDiameter, ..Default::default() };
        let ids: Vec<String> = state.apply(&records).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let records = vec![
            record("1", "A", 0.2, true),
            record("2", "B", 0.2, true),
            record("3", "C", 0.2, true),
        ];
        let state = SelectionState { sort_key: SortKey::AvgDiameter, ..Default::default() };
        let ids: Vec<String> = state.apply(&records).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        let descending = SelectionState {
            sort_key: SortKey::AvgDiameter,
            ascending: false,
            ..Default::default()
        };
        let ids: Vec<String> = descending.apply(&records).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let state = SelectionState::default();
        assert!(state.apply(&[]).is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let records = vec![
            record("1", "B", 0.3, true),
            record("2", "A", 0.2, true),
        ];
        let state = SelectionState { sort_key: SortKey::Name, ..Default::default() };
        let _ = state.apply(&records);
        assert_eq!(records[0].id, "1");
    }
}
