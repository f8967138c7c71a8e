//! Error types for the casepull SDK.

use casepull_domain::FetchError;
use thiserror::Error;

/// SDK setup and credential errors
///
/// Per-case fetch outcomes use [`FetchError`] instead; this type covers
/// everything that happens before the first case request.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    ClientBuild(String),

    /// Connection error (network, DNS, etc.)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Token endpoint rejected the request or returned an error status
    #[error("Token endpoint error: {0}")]
    TokenEndpoint(String),

    /// Authentication or authorization error
    #[error("Authentication error: {0}")]
    AuthError(String),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        // Only the token exchange converts reqwest errors into SdkError
        if e.is_decode() {
            SdkError::TokenEndpoint(format!("Malformed token response: {}", e))
        } else {
            SdkError::ConnectionError(e.to_string())
        }
    }
}

/// Classify a transport-level failure from a case request
///
/// Body decoding failures mean the server answered but not with JSON; every
/// other reqwest failure on this path is a network problem.
pub(crate) fn classify_transport_error(e: reqwest::Error) -> FetchError {
    if e.is_decode() {
        FetchError::MalformedBody(e.to_string())
    } else {
        FetchError::Network(e.to_string())
    }
}
