//! Credentials attached to case requests.

use std::fmt;

/// Authorization presented with every case request
///
/// Acquisition and refresh happen outside this crate; the client only needs
/// a value to attach. `Debug` output never includes the secret.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// `Authorization: Bearer {token}`
    Bearer(String),

    /// HTTP basic authentication
    Basic {
        /// Account name
        username: String,
        /// Account password
        password: String,
    },
}

impl Credential {
    /// Bearer credential from a token string (surrounding whitespace trimmed)
    pub fn bearer(token: impl AsRef<str>) -> Self {
        Credential::Bearer(token.as_ref().trim().to_string())
    }

    /// Basic credential from a username and password
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credential::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Short human-readable description of the scheme
    pub fn scheme(&self) -> &'static str {
        match self {
            Credential::Bearer(_) => "bearer token",
            Credential::Basic { .. } => "basic auth",
        }
    }

    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Credential::Bearer(token) => request.bearer_auth(token),
            Credential::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Bearer(_) => f.write_str("Credential::Bearer(***)"),
            Credential::Basic { username, .. } => f
                .debug_struct("Credential::Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

/// Whether a configured secret is missing or still a template value
///
/// Empty strings, the literal `None` and anything starting with `YOUR_`
/// (e.g. `YOUR_TOKEN_HERE`) count as "not configured".
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == "None" || value.starts_with("YOUR_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_detection() {
        assert!(is_placeholder(""));
        assert!(is_placeholder("   "));
        assert!(is_placeholder("None"));
        assert!(is_placeholder("YOUR_TOKEN_HERE"));
        assert!(!is_placeholder("eyJhbGciOiJSUzI1NiJ9.payload.sig"));
    }

    #[test]
    fn test_bearer_trims_whitespace() {
        let credential = Credential::bearer("  abc.def \n");
        assert_eq!(credential, Credential::Bearer("abc.def".to_string()));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let bearer = format!("{:?}", Credential::bearer("secret-token"));
        assert!(!bearer.contains("secret-token"));

        let basic = format!("{:?}", Credential::basic("alice", "hunter2"));
        assert!(basic.contains("alice"));
        assert!(!basic.contains("hunter2"));
    }
}
