//! Feed source clients.

pub mod neows;

use async_trait::async_trait;

use neowatch_common::{NeowatchError, QueryWindow, Result};

use crate::models::RawFeed;

pub use neows::NeoWsClient;

/// Narrow capability over the upstream feed: one window in, one payload
/// out. The core pipeline is exercised in tests entirely through this
/// seam, with no network dependency.
#[async_trait]
pub trait NeoFeedSource: Send + Sync {
    /// Fetch the feed for a query window. Any failure is terminal for
    /// the query; there are no retries.
    async fn fetch_feed(&self, window: &QueryWindow) -> Result<RawFeed>;
}

// ── Mock implementation for testing ────────────────────────────────────────

/// Mock source returning a canned payload or a canned failure.
pub struct MockFeedSource {
    feed: Option<RawFeed>,
    error: Option<String>,
}

impl MockFeedSource {
    pub fn new() -> Self {
        Self { feed: None, error: None }
    }

    /// Serve this payload for every window.
    pub fn with_feed(mut self, feed: RawFeed) -> Self {
        self.feed = Some(feed);
        self
    }

    /// Fail every fetch with this message.
    pub fn with_error(mut self, message: &str) -> Self {
        self.error = Some(message.to_string());
        self
    }
}

impl Default for MockFeedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NeoFeedSource for MockFeedSource {
    async fn fetch_feed(&self, _window: &QueryWindow) -> Result<RawFeed> {
        if let Some(ref message) = self.error {
            return Err(NeowatchError::Fetch(message.clone()));
        }
        self.feed
            .clone()
            .ok_or_else(|| NeowatchError::Fetch("mock source has no feed".to_string()))
    }
}
