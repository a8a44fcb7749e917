use thiserror::Error;

#[derive(Debug, Error)]
pub enum NeowatchError {
    #[error("Feed request failed: {0}")]
    Fetch(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed object record: {0}")]
    MalformedRecord(String),

    #[error("Aggregate requested over an empty record set")]
    EmptyCorpus,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, NeowatchError>;
