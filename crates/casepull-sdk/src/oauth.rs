//! OAuth 2.0 client-credentials exchange.
//!
//! Service accounts can trade a client id and secret for a short-lived bearer
//! token at the SSO token endpoint. This is a single POST; refresh is not
//! handled.

use crate::credential::Credential;
use crate::error::SdkError;
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

/// Default SSO token endpoint
pub const DEFAULT_TOKEN_URL: &str =
    "https://sso.redhat.com/auth/realms/redhat-external/protocol/openid-connect/token";

/// Token endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token to present to the case API
    pub access_token: String,
    /// Lifetime in seconds, when the endpoint reports it
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Token type (normally "Bearer")
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Exchange client credentials for an access token
pub async fn exchange_client_credentials(
    http_client: &reqwest::Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<TokenResponse, SdkError> {
    let form = [
        ("grant_type", "client_credentials"),
        ("client_id", client_id),
        ("client_secret", client_secret),
    ];

    let response = http_client.post(token_url).form(&form).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(SdkError::TokenEndpoint(format!("HTTP {}: {}", status, error_text)));
    }

    let token: TokenResponse = response.json().await?;

    if token.access_token.trim().is_empty() {
        return Err(SdkError::AuthError(
            "Token endpoint returned an empty access_token".to_string(),
        ));
    }

    match token.expires_in {
        Some(secs) => info!("Obtained access token (expires in {} seconds)", secs),
        None => info!("Obtained access token"),
    }

    Ok(token)
}

/// Obtain a bearer [`Credential`] via the client-credentials flow
pub async fn bearer_from_client_credentials(
    token_url: &str,
    client_id: &str,
    client_secret: &str,
    timeout: Duration,
) -> Result<Credential, SdkError> {
    let http_client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| SdkError::ClientBuild(e.to_string()))?;

    let token =
        exchange_client_credentials(&http_client, token_url, client_id, client_secret).await?;
    Ok(Credential::bearer(token.access_token))
}
