use axum::http::StatusCode;
use thiserror::Error;

/// Failures talking to the backend API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("Request to backend failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The backend answered with a non-success status
    #[error("Backend responded with status {0}")]
    Status(StatusCode),
    /// The body did not match the expected shape
    #[error("Malformed response from backend: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("Backend did not return a CSRF token")]
    MissingCsrfToken,
}

impl ApiError {
    /// Status surfaced to callers for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Status(status) => *status,
            Self::Request(_) | Self::MalformedResponse(_) | Self::MissingCsrfToken => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}
