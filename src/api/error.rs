//! API Error Types
//!
//! Failures talking to the monitoring backend. All of them are recoverable:
//! the dashboard logs them and shows a toast.

use thiserror::Error;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Could not reach the backend at all
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Backend answered with a non-success HTTP status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Backend answered `success: false`
    #[error("Backend error: {0}")]
    Backend(String),

    /// Response body did not have the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Any other transport failure
    #[error("Request failed: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_connect() {
            ApiError::Unavailable(e.to_string())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Result alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;
