//! Terminal report rendering: summary block, record table, detail view,
//! JSON dump. Formatting only; every number is computed by the pipeline.

use serde::Serialize;

use neowatch_common::{FlatRecord, Result};
use neowatch_pipeline::{score, Aggregate, HazardTier};

pub fn print_summary(agg: &Aggregate) {
    println!("Total objects:         {}", agg.total);
    println!(
        "Potentially hazardous: {} ({:.1}%)",
        agg.hazardous_count, agg.hazardous_pct
    );
    println!("Mean average size:     {:.2} km", agg.mean_avg_diameter_km);
    println!();
}

pub fn print_table(records: &[FlatRecord]) {
    println!(
        "{:<24} {:<12} {:>12} {:>16} {:>14} {:>7}",
        "Name", "Approach", "Diameter km", "Miss dist. km", "Velocity km/h", "Hazard"
    );
    for r in records {
        println!(
            "{:<24} {:<12} {:>12.3} {:>16} {:>14} {:>7}",
            r.name,
            r.close_approach_date,
            r.avg_diameter_km,
            group_thousands(r.miss_distance_km),
            group_thousands(r.relative_velocity_kph),
            if r.is_hazardous { "yes" } else { "no" },
        );
    }
}

pub fn print_detail(record: &FlatRecord) {
    let hazard = score(record);

    println!("{}", record.name);
    println!("  ID:               {}", record.id);
    println!("  Approach date:    {}", record.close_approach_date);
    println!(
        "  Hazardous:        {}",
        if record.is_hazardous { "yes" } else { "no" }
    );
    println!(
        "  Diameter range:   {:.3} - {:.3} km",
        record.diameter_min_km, record.diameter_max_km
    );
    println!(
        "  Miss distance:    {} km",
        group_thousands(record.miss_distance_km)
    );
    println!(
        "  Velocity:         {} km/h",
        group_thousands(record.relative_velocity_kph)
    );
    println!(
        "  Hazard level:     {:.1}% ({})",
        hazard.value,
        hazard.tier.as_str()
    );
    println!("  {}", context_line(hazard.tier));
}

#[derive(Serialize)]
struct JsonReport<'a> {
    records: &'a [FlatRecord],
    aggregate: Option<&'a Aggregate>,
}

pub fn print_json(records: &[FlatRecord], aggregate: Option<&Aggregate>) -> Result<()> {
    let report = JsonReport { records, aggregate };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn context_line(tier: HazardTier) -> &'static str {
    match tier {
        HazardTier::High => {
            "This object is classified as potentially hazardous and is relatively large and close."
        }
        HazardTier::Medium => {
            "This object is classified as potentially hazardous but poses minimal risk at this time."
        }
        HazardTier::Low => "This object is not considered hazardous and poses no risk to Earth.",
    }
}

fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if rounded < 0 {
        format!("-{out}")
    } else {
        out
    }
}
