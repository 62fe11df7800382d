//! Error handling for the job matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, MatcherError>;

impl From<toml::de::Error> for MatcherError {
    fn from(err: toml::de::Error) -> Self {
        MatcherError::Configuration(format!("Failed to parse config: {}", err))
    }
}

impl From<toml::ser::Error> for MatcherError {
    fn from(err: toml::ser::Error) -> Self {
        MatcherError::Configuration(format!("Failed to serialize config: {}", err))
    }
}
