//! Fetch error taxonomy

use thiserror::Error;

/// Why a single case could not be fetched
///
/// Every variant is terminal for that case within a run: nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// HTTP 401: the credential is invalid or has expired
    #[error("authentication failed (credential invalid or expired)")]
    AuthExpired,

    /// HTTP 404: the case does not exist or the caller lacks entitlement
    #[error("case not found or no access")]
    NotFoundOrForbidden,

    /// Any other non-200 status
    #[error("unexpected HTTP status {0}")]
    Unexpected(u16),

    /// Transport failure (timeout, DNS, connection reset, ...)
    #[error("network error: {0}")]
    Network(String),

    /// HTTP 200 whose body is not a JSON object
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

impl FetchError {
    /// Short classification label used in diagnostics and summaries
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::AuthExpired => "auth-expired",
            FetchError::NotFoundOrForbidden => "not-found",
            FetchError::Unexpected(_) => "http-error",
            FetchError::Network(_) => "network",
            FetchError::MalformedBody(_) => "malformed-body",
        }
    }

    /// Whether the operator must reissue the credential out-of-band
    pub fn is_auth(&self) -> bool {
        matches!(self, FetchError::AuthExpired)
    }
}
