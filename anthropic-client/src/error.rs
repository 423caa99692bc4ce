//! Error types for Messages API calls.

use thiserror::Error;

/// Failure modes of a Messages API call.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (connect, TLS, body read).
    #[error("anthropic request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("anthropic API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response carried no text content block.
    #[error("anthropic response contained no text content")]
    EmptyResponse,
}
