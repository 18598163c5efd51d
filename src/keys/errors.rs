/// Errors from the key collection layer.
use thiserror::Error;

use crate::github::ApiError;

/// Errors that can occur while collecting keys or writing them out.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No team in the organization matched the requested name or slug.
    #[error("no team named '{team}' in organization '{org}'")]
    TeamNotFound {
        /// The organization that was searched.
        org: String,
        /// The requested team name or slug.
        team: String,
    },

    /// An underlying API error.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// The collected keys could not be written out.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit code mapping for `FetchError` variants.
impl FetchError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TeamNotFound { .. } => 1,
            Self::Api(_) => 2,
            Self::Io(_) => 3,
        }
    }
}
