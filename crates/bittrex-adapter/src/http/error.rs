/*
[INPUT]:  Error sources (HTTP transport, JSON decode, URL parsing)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Bittrex adapter.
///
/// Upstream business failures (`success: false` envelopes) are NOT errors;
/// they are delivered as [`crate::ApiOutcome::Failure`]. This type covers the
/// cases where no envelope was obtained at all.
#[derive(Error, Debug)]
pub enum BittrexError {
    /// HTTP request failed (connect, timeout, status read, body decode)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Final request URI did not parse as an absolute URL
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl BittrexError {
    /// Check whether the error happened below the API envelope layer,
    /// i.e. the upstream service never delivered a parseable response.
    pub fn is_transport(&self) -> bool {
        matches!(self, BittrexError::Http(_))
    }
}

/// Result type alias for Bittrex adapter operations
pub type Result<T> = std::result::Result<T, BittrexError>;
