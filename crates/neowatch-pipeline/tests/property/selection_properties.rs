use chrono::NaiveDate;
use proptest::prelude::*;

use neowatch_common::FlatRecord;
use neowatch_pipeline::{score, SelectionState, SortKey};

fn arb_record() -> impl Strategy<Value = FlatRecord> {
    (
        0u32..10_000,
        0.0f64..2.0,
        any::<bool>(),
        1.0f64..100_000_000.0,
        1.0f64..200_000.0,
        0u32..28,
    )
        .prop_map(|(id, diameter, hazardous, miss, velocity, day)| {
            let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                + chrono::Duration::days(day as i64);
            FlatRecord {
                id: id.to_string(),
                name: format!("NEO-{id}"),
                observation_date: date,
                diameter_min_km: diameter,
                diameter_max_km: diameter,
                avg_diameter_km: diameter,
                is_hazardous: hazardous,
                close_approach_date: date,
                miss_distance_km: miss,
                relative_velocity_kph: velocity,
            }
        })
}

proptest! {
    #[test]
    fn filters_commute(records in prop::collection::vec(arb_record(), 0..40), min_size in 0.0f64..2.0) {
        let hazard_first: Vec<FlatRecord> = records.iter()
            .filter(|r| r.is_hazardous)
            .filter(|r| r.avg_diameter_km >= min_size)
            .cloned()
            .collect();
        let size_first: Vec<FlatRecord> = records.iter()
            .filter(|r| r.avg_diameter_km >= min_size)
            .filter(|r| r.is_hazardous)
            .cloned()
            .collect();
        prop_assert_eq!(hazard_first, size_first);
    }

    #[test]
    fn selection_never_invents_records(records in prop::collection::vec(arb_record(), 0..40)) {
        let state = SelectionState { hazardous_only: true, min_size_km: 0.5, ..Default::default() };
        let selected = state.apply(&records);
        prop_assert!(selected.len() <= records.len());
        for r in &selected {
            prop_assert!(r.is_hazardous && r.avg_diameter_km >= 0.5);
        }
    }

    #[test]
    fn sort_is_stable_on_equal_keys(n in 1usize..30) {
        // All records share one diameter; order must survive the sort.
        let records: Vec<FlatRecord> = (0..n)
            .map(|i| {
                let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
                FlatRecord {
                    id: i.to_string(),
                    name: format!("NEO-{i}"),
                    observation_date: date,
                    diameter_min_km: 0.2,
                    diameter_max_km: 0.2,
                    avg_diameter_km: 0.2,
                    is_hazardous: true,
                    close_approach_date: date,
                    miss_distance_km: 500_000.0,
                    relative_velocity_kph: 40_000.0,
                }
            })
            .collect();

        let state = SelectionState { sort_key: SortKey::AvgDiameter, ..Default::default() };
        let sorted = state.apply(&records);
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<String> = (0..n).map(|i| i.to_string()).collect();
        prop_assert_eq!(ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn score_is_bounded(record in arb_record()) {
        let s = score(&record);
        prop_assert!(s.value >= 0.0 && s.value <= 100.0);
        if !record.is_hazardous {
            prop_assert_eq!(s.value, 0.0);
        }
    }

    #[test]
    fn ascending_is_reverse_of_descending_on_distinct_keys(
        records in prop::collection::vec(arb_record(), 0..30)
    ) {
        // Ids are not unique across generated records, so compare by the
        // sort key itself, which is what direction must invert.
        let asc = SelectionState { sort_key: SortKey::MissDistance, ascending: true, ..Default::default() };
        let desc = SelectionState { sort_key: SortKey::MissDistance, ascending: false, ..Default::default() };

        let up: Vec<f64> = asc.apply(&records).iter().map(|r| r.miss_distance_km).collect();
        let mut down: Vec<f64> = desc.apply(&records).iter().map(|r| r.miss_distance_km).collect();
        down.reverse();
        prop_assert_eq!(up, down);
    }
}
