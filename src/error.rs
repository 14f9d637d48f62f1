use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Initialization error: {0}")]
    Init(String),

    #[error("Rate limiter wait canceled after {0:?}")]
    Canceled(Duration),

    #[error("Document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Submission failed with status {status}: {body}")]
    Submission { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
