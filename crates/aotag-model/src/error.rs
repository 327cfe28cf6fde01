use thiserror::Error;

/// Errors raised while reading a format configuration out of JSON.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to deserialize format configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration group '{group}' is not a JSON object")]
    GroupNotObject { group: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
