//! Error types for the client library.

use thiserror::Error;

/// Errors raised while constructing a client.
///
/// Request execution never returns these: HTTP error statuses and
/// transport failures are folded into
/// [`ApiResponse`](tokenloop_common::ApiResponse) values instead, so the
/// run loop can inspect error bodies rather than abort.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The configured host/port did not form a valid base URL.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// The underlying HTTP client could not be built.
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}
