//! Error types for the hoops-stats client

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, HoopsError>;

/// Failure delivered by an [`ApiClient`](crate::api::ApiClient) call.
///
/// Transport failures, non-2xx statuses and JSON shape mismatches are all
/// folded into this one kind; callers only ever see the description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Error(String),
}

impl ApiError {
    pub fn new(description: impl Into<String>) -> Self {
        ApiError::Error(description.into())
    }

    /// Human-readable description carried by the error.
    pub fn description(&self) -> &str {
        match self {
            ApiError::Error(description) => description,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::new(format!("Error decoding data: {}", err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::new(format!("Error decoding data: {}", err))
    }
}

#[derive(Error, Debug)]
pub enum HoopsError {
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("HTTP client setup failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("Invalid search: {message}")]
    InvalidSearch { message: String },

    #[error("Fetching {resource} failed (run with --verbose for details)")]
    FetchFailed { resource: &'static str },
}
