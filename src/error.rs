use thiserror::Error;

/// Everything that can go wrong inside one poll cycle.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("slack api error: {0}")]
    Api(String),

    #[error("marker file error: {0}")]
    Io(#[from] std::io::Error),
}
