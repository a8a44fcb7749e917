//! neowatch-ingestion — NeoWs feed payload models and the fetch boundary.

pub mod models;
pub mod sources;

pub use models::{RawFeed, RawNeo};
pub use sources::{MockFeedSource, NeoFeedSource};
