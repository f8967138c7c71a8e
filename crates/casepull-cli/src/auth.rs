//! Credential resolution.

use crate::config::AuthConfig;
use crate::error::{CliError, Result};
use casepull_sdk::{is_placeholder, oauth, Credential};
use std::time::Duration;
use tracing::{debug, info};

const SETUP_HINT: &str = "Set auth.bearer_token in the config file \
    (run `casepull init` to create one), pass --token, or export CASEPULL_TOKEN.";

/// Where a credential may come from, in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// `--token` / `CASEPULL_TOKEN`
    Override,
    /// `auth.bearer_token`
    BearerToken,
    /// `[auth.oauth]` client credentials
    OAuth,
    /// `[auth.basic]`
    Basic,
}

/// Pick the first configured credential source without contacting anything.
///
/// Placeholder values (`YOUR_...`, `None`, empty) are skipped.
pub fn select_source(token_override: Option<&str>, auth: &AuthConfig) -> Option<CredentialSource> {
    if token_override.is_some_and(|t| !is_placeholder(t)) {
        return Some(CredentialSource::Override);
    }
    if auth.bearer_token.as_deref().is_some_and(|t| !is_placeholder(t)) {
        return Some(CredentialSource::BearerToken);
    }
    if auth
        .oauth
        .as_ref()
        .is_some_and(|o| !is_placeholder(&o.client_id) && !is_placeholder(&o.client_secret))
    {
        return Some(CredentialSource::OAuth);
    }
    if auth
        .basic
        .as_ref()
        .is_some_and(|b| !is_placeholder(&b.username) && !is_placeholder(&b.password))
    {
        return Some(CredentialSource::Basic);
    }
    None
}

/// Resolve the credential for this run.
///
/// OAuth client credentials are exchanged for a bearer token once, up front.
pub async fn resolve_credential(
    token_override: Option<&str>,
    auth: &AuthConfig,
    timeout: Duration,
) -> Result<Credential> {
    let source = select_source(token_override, auth)
        .ok_or_else(|| CliError::MissingCredential(SETUP_HINT.to_string()))?;
    debug!("Using credential source {:?}", source);

    match source {
        CredentialSource::Override => Ok(Credential::bearer(token_override.unwrap_or_default())),
        CredentialSource::BearerToken => {
            Ok(Credential::bearer(auth.bearer_token.as_deref().unwrap_or_default()))
        }
        CredentialSource::OAuth => {
            let oauth_config = auth
                .oauth
                .as_ref()
                .ok_or_else(|| CliError::MissingCredential(SETUP_HINT.to_string()))?;
            info!("Requesting access token from {}", oauth_config.token_url);
            let credential = oauth::bearer_from_client_credentials(
                &oauth_config.token_url,
                &oauth_config.client_id,
                &oauth_config.client_secret,
                timeout,
            )
            .await?;
            Ok(credential)
        }
        CredentialSource::Basic => {
            let basic = auth
                .basic
                .as_ref()
                .ok_or_else(|| CliError::MissingCredential(SETUP_HINT.to_string()))?;
            Ok(Credential::basic(&basic.username, &basic.password))
        }
    }
}
