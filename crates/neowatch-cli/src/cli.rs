use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use neowatch_pipeline::SortKey;

#[derive(Parser, Debug)]
#[command(name = "neowatch", version, about = "NASA near-Earth-object feed tracker")]
pub struct Cli {
    #[arg(long, help = "Window start date (YYYY-MM-DD); defaults to today")]
    pub start: Option<NaiveDate>,
    #[arg(long, help = "Window end date (YYYY-MM-DD); defaults to start + 7 days")]
    pub end: Option<NaiveDate>,
    #[arg(long, help = "Keep only potentially hazardous objects")]
    pub hazardous_only: bool,
    #[arg(long, default_value_t = 0.0, help = "Minimum average diameter in km")]
    pub min_size: f64,
    #[arg(long, value_enum, default_value_t = SortKeyArg::ApproachDate)]
    pub sort_by: SortKeyArg,
    #[arg(long, help = "Sort descending instead of ascending")]
    pub descending: bool,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, value_name = "NAME", help = "Detail view for one object, by exact name")]
    pub detail: Option<String>,
}

/// clap-facing mirror of the pipeline's sort key.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKeyArg {
    ApproachDate,
    Name,
    AvgDiameter,
    MissDistance,
    RelativeVelocity,
}

impl From<SortKeyArg> for SortKey {
    fn from(arg: SortKeyArg) -> Self {
        match arg {
            SortKeyArg::ApproachDate     => SortKey::ApproachDate,
            SortKeyArg::Name             => SortKey::Name,
            SortKeyArg::AvgDiameter      => SortKey::AvgDiameter,
            SortKeyArg::MissDistance     => SortKey::MissDistance,
            SortKeyArg::RelativeVelocity => SortKey::RelativeVelocity,
        }
    }
}
