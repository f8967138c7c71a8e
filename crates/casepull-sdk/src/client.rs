//! Case API client implementation.

use crate::credential::Credential;
use crate::error::{classify_transport_error, SdkError};
use casepull_domain::{CaseId, CaseRecord, CaseSource, FetchError};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default case API root
pub const DEFAULT_BASE_URL: &str = "https://access.redhat.com/hydra/rest";

/// Default API version path segment
pub const DEFAULT_API_VERSION: &str = "v1";

/// Default per-request timeout (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the case API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    /// API root, e.g. `https://access.redhat.com/hydra/rest`
    pub base_url: String,
    /// Version segment, e.g. `v1`
    pub version: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Case API client
///
/// Issues exactly one `GET {base}/{version}/cases/{id}` per [`fetch`](Self::fetch)
/// call and classifies the outcome. There is no retry.
pub struct CaseClient {
    settings: ApiSettings,
    credential: Credential,
    http: reqwest::Client,
}

impl CaseClient {
    /// Create a new client
    pub fn new(settings: ApiSettings, credential: Credential) -> Result<Self, SdkError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| SdkError::ClientBuild(e.to_string()))?;

        Ok(Self {
            settings,
            credential,
            http,
        })
    }

    /// Settings this client was built with
    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Full URL for a case
    pub fn case_url(&self, id: &CaseId) -> String {
        format!(
            "{}/{}/cases/{}",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.version.trim_matches('/'),
            id
        )
    }

    /// Fetch a single case
    ///
    /// - 200: body parsed into a [`CaseRecord`]
    /// - 401: [`FetchError::AuthExpired`]
    /// - 404: [`FetchError::NotFoundOrForbidden`]
    /// - other status: [`FetchError::Unexpected`]
    /// - transport failure: [`FetchError::Network`]
    /// - 200 with a non-object body: [`FetchError::MalformedBody`]
    pub async fn fetch(&self, id: &CaseId) -> Result<CaseRecord, FetchError> {
        let url = self.case_url(id);
        debug!(case = %id, %url, "Fetching case");

        let request = self.http.get(&url).header(ACCEPT, "application/json");
        let response = self
            .credential
            .apply(request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        debug!(case = %id, status = status.as_u16(), "Case response received");

        match status {
            StatusCode::OK => {
                let body: Value = response.json().await.map_err(classify_transport_error)?;
                CaseRecord::from_value(body).map_err(|other| {
                    FetchError::MalformedBody(format!(
                        "expected a JSON object, got {}",
                        json_kind(&other)
                    ))
                })
            }
            StatusCode::UNAUTHORIZED => Err(FetchError::AuthExpired),
            StatusCode::NOT_FOUND => Err(FetchError::NotFoundOrForbidden),
            other => Err(FetchError::Unexpected(other.as_u16())),
        }
    }
}

impl CaseSource for CaseClient {
    async fn fetch_case(&self, id: &CaseId) -> Result<CaseRecord, FetchError> {
        self.fetch(id).await
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
