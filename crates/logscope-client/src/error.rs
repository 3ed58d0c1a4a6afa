//! Error types for the log source client.

use thiserror::Error;

/// Failures surfaced by the log source client.
///
/// All variants are recoverable: a failed operation never corrupts
/// previously fetched state, it only reports why nothing new arrived.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Init(#[source] reqwest::Error),

    /// The remote source was unreachable or timed out.
    #[error("log source unreachable: {0}")]
    Network(#[source] reqwest::Error),

    /// The remote source answered but refused the request.
    #[error("log source rejected the request: {0}")]
    Rejected(String),

    /// The response body did not match the expected payload shape.
    #[error("malformed log payload: {0}")]
    Malformed(#[source] reqwest::Error),
}

/// Result type alias for log source operations.
pub type Result<T> = std::result::Result<T, FetchError>;
