//! Commerce client error types.

use thiserror::Error;

/// Errors raised while constructing or using a [`CommerceClient`](crate::CommerceClient).
#[derive(Error, Debug)]
pub enum CommerceError {
    /// The public key was the empty string.
    #[error("Public key must not be empty")]
    EmptyPublicKey,

    /// The configured API URL could not be parsed.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// The platform answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Json(e.to_string())
    }
}

impl From<reqwest::Error> for CommerceError {
    fn from(e: reqwest::Error) -> Self {
        CommerceError::Request(e.to_string())
    }
}
