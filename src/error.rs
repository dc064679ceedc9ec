//! Error types per layer
//!
//! Fetch errors are per-platform and non-fatal: the scanner logs them and
//! treats the platform as having no data. Store and document errors abort
//! the current operation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} for platform {platform}")]
    UnexpectedStatus {
        platform: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No download URL for platform {0}")]
    MissingDownloadUrl(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("version table not found in document")]
    TableNotFound,
}
