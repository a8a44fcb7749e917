//! neowatch-pipeline — the core feed pipeline.
//!
//! Raw payload → [`normalise::flatten_feed`] → [`selection::SelectionState::apply`]
//! → [`metrics::Aggregate::compute`] / [`hazard::score`]. Everything here
//! is pure synchronous code over immutable records; the fetch boundary
//! lives in neowatch-ingestion.

pub mod hazard;
pub mod metrics;
pub mod normalise;
pub mod selection;

pub use hazard::{score, HazardScore, HazardTier};
pub use metrics::Aggregate;
pub use normalise::flatten_feed;
pub use selection::{SelectionState, SortKey};
