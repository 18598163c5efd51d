/// Errors from the GitHub API layer.
use reqwest::StatusCode;
use thiserror::Error;

/// Typed errors from API requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent, or a success body could not be decoded.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("GitHub API request failed ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Status {
        /// HTTP status of the response.
        status: StatusCode,
        /// The platform's own `message` field, when the body carried one.
        message: Option<String>,
        /// The platform's `documentation_url` field, when present.
        documentation_url: Option<String>,
    },
}
