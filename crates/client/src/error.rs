//! Client data layer error type.

use thiserror::Error;

/// Errors surfaced by the client data layer.
///
/// `Clone` because coalesced in-flight fetches share one error across all
/// waiters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Transport-level failure (connection refused, timeout, DNS).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The API answered with a failure envelope or a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A cache entry held a different payload kind than the key implies.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl QueryError {
    /// Retry policy input: client errors (4xx) are not retried, except 401,
    /// which may be a token that is still being refreshed. Everything else
    /// (network failures, 5xx, decode problems) is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Api { status, .. } => !(*status >= 400 && *status < 500) || *status == 401,
            Self::Http(_) | Self::Decode(_) | Self::Internal(_) => true,
        }
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}
