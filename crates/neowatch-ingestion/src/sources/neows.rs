//! NASA NeoWs (Near Earth Object Web Service) feed client.
//!
//! API: https://api.nasa.gov/neo/rest/v1/feed
//! One request per query window; the endpoint rejects windows wider than
//! seven days, so callers clamp before fetching. The API key is a static
//! credential passed as a query parameter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use tracing::{debug, info};

use neowatch_common::{NeowatchError, QueryWindow, Result};

use super::NeoFeedSource;
use crate::models::RawFeed;

pub const NEOWS_API_URL: &str = "https://api.nasa.gov/neo/rest/v1";

const DATE_FMT: &str = "%Y-%m-%d";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct NeoWsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NeoWsClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(NEOWS_API_URL, api_key, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| NeowatchError::Fetch(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl NeoFeedSource for NeoWsClient {
    async fn fetch_feed(&self, window: &QueryWindow) -> Result<RawFeed> {
        let url = format!("{}/feed", self.base_url);
        debug!(%url, start = %window.start, end = %window.end, "requesting NeoWs feed");

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("start_date", window.start.format(DATE_FMT).to_string()),
                ("end_date", window.end.format(DATE_FMT).to_string()),
                ("api_key", self.api_key.clone()),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(NeowatchError::Fetch(format!(
                "NeoWs feed returned {}",
                resp.status()
            )));
        }

        let feed: RawFeed = resp.json().await?;
        info!(element_count = feed.element_count, "NeoWs feed received");
        Ok(feed)
    }
}
