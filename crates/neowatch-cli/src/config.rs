//! Configuration loading for neowatch.
//! Reads neowatch.toml from the current directory or the path in the
//! NEOWATCH_CONFIG env var; a missing file falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use neowatch_common::{NeowatchError, Result, MAX_FEED_SPAN_DAYS};
use neowatch_ingestion::sources::neows::NEOWS_API_URL;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Inline key; when absent the NASA_API_KEY env var is required.
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String { NEOWS_API_URL.to_string() }
fn default_timeout_secs() -> u64 { 30 }

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// May be lowered below the upstream ceiling (e.g. to stay well under
    /// rate limits) but never raised above it.
    #[serde(default = "default_max_span_days")]
    pub max_span_days: i64,
}

fn default_max_span_days() -> i64 { MAX_FEED_SPAN_DAYS }

impl Default for QueryConfig {
    fn default() -> Self {
        Self { max_span_days: default_max_span_days() }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path =
            std::env::var("NEOWATCH_CONFIG").unwrap_or_else(|_| "neowatch.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| NeowatchError::Config(format!("cannot read {}: {e}", path.display())))?;
        let mut config: Config = toml::from_str(&raw)
            .map_err(|e| NeowatchError::Config(format!("cannot parse {}: {e}", path.display())))?;

        // The upstream ceiling is authoritative.
        if config.query.max_span_days > MAX_FEED_SPAN_DAYS {
            config.query.max_span_days = MAX_FEED_SPAN_DAYS;
        }
        Ok(config)
    }

    /// Resolve the feed credential: inline config key first, then the
    /// NASA_API_KEY environment variable.
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Some(ref key) = self.feed.api_key {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }
        std::env::var("NASA_API_KEY").map_err(|_| {
            NeowatchError::Config(
                "no API key: set feed.api_key in neowatch.toml or the NASA_API_KEY environment variable"
                    .to_string(),
            )
        })
    }
}
