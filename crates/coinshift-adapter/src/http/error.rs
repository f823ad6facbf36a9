/*
[INPUT]:  Error sources (HTTP transport, status codes, JSON decoding, GraphQL, keys)
[OUTPUT]: Structured error types with context for operator-facing logs
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Coinshift adapter
#[derive(Error, Debug)]
pub enum CoinshiftError {
    /// HTTP transport failed before a response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    /// Response body was not the JSON shape we expected
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// GraphQL envelope carried a non-empty errors list
    #[error("GraphQL error: {0}")]
    GraphQL(String),

    /// Response decoded but violated the contract (missing data, empty token)
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Private key could not be parsed or is not on the curve
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    /// Message signing failed
    #[error("Signing failed: {0}")]
    Signing(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoinshiftError {
    /// Check if the error must abort the whole run.
    ///
    /// Only configuration errors are fatal; every other variant is scoped
    /// to the account that triggered it.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CoinshiftError::Config(_))
    }

    /// Create an UnexpectedStatus error, truncating oversized bodies so a
    /// misbehaving server cannot flood the logs.
    pub fn unexpected_status(status: StatusCode, body: String) -> Self {
        const MAX_BODY: usize = 2048;
        let body = if body.len() > MAX_BODY {
            let mut end = MAX_BODY;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &body[..end])
        } else {
            body
        };
        CoinshiftError::UnexpectedStatus { status, body }
    }
}

/// Result type alias for Coinshift operations
pub type Result<T> = std::result::Result<T, CoinshiftError>;
