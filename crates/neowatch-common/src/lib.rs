//! neowatch-common — Shared types and errors used across all neowatch crates.

pub mod error;
pub mod record;
pub mod window;

// Re-export commonly used types
pub use error::{NeowatchError, Result};
pub use record::FlatRecord;
pub use window::{QueryWindow, MAX_FEED_SPAN_DAYS};
