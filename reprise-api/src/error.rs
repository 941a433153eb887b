//! Error types for the remote command channel

use thiserror::Error;

/// Errors that can occur while talking to the remote player
///
/// Every failure mode of a single request collapses into one of these
/// variants; there are no partial results.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, DNS, ...)
    #[error("network error: {0}")]
    Network(String),

    /// The remote answered with a non-success HTTP status
    #[error("remote returned HTTP {0}")]
    Status(u16),

    /// The response body could not be decoded as JSON
    #[error("malformed response: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
