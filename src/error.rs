//! Common error type and alias.
//!
//! Only failures that stop an interaction before or around the HTTP call live
//! here. What the inference endpoint answers, including its errors and
//! transport failures, is an [`InferenceOutcome`](crate::inference::InferenceOutcome).
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or unusable configuration; fatal at startup.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// User input rejected before any request is made.
    #[error("{0}")]
    Validation(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
