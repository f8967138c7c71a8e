//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use casepull_extractor::ExtractorConfig;
use casepull_sdk::{
    oauth::DEFAULT_TOKEN_URL, ApiSettings, DEFAULT_API_VERSION, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT_SECS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Case API endpoint
    #[serde(default)]
    pub api: ApiConfig,

    /// Credentials
    #[serde(default)]
    pub auth: AuthConfig,

    /// Column extraction settings
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Case API endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API root URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API version segment
    #[serde(default = "default_version")]
    pub version: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Credential sources, tried in order: bearer token, OAuth, basic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer token copied from the browser session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,

    /// Service-account client credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oauth: Option<OAuthConfig>,

    /// HTTP basic credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicConfig>,
}

/// OAuth client-credentials settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthConfig {
    /// Client id
    pub client_id: String,

    /// Client secret
    pub client_secret: String,

    /// Token endpoint
    #[serde(default = "default_token_url")]
    pub token_url: String,
}

/// HTTP basic settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicConfig {
    /// Account name
    pub username: String,

    /// Account password
    pub password: String,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Pause between consecutive case requests, in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Config {
    /// Default configuration file path (`~/.casepull/config.toml`).
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".casepull").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. The default path may be missing, in
    /// which case built-in defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(CliError::Config(format!(
                    "Config file '{}' not found",
                    path.display()
                )))
            }
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| {
                CliError::Config(format!("Cannot read '{}': {}", path.display(), e))
            })?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check values that would make every request fail.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(CliError::Config("api.base_url must not be empty".into()));
        }
        if self.api.timeout_secs == 0 {
            return Err(CliError::Config("api.timeout_secs must be greater than 0".into()));
        }
        self.extractor
            .validate()
            .map_err(|e| CliError::Config(format!("extractor: {}", e)))
    }

    /// Client settings derived from the `[api]` section.
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.api.base_url.clone(),
            version: self.api.version.clone(),
            timeout: self.api.timeout(),
        }
    }

    /// Pause between consecutive case requests.
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.settings.request_delay_ms)
    }
}

impl ApiConfig {
    /// Per-request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version: default_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            request_delay_ms: default_request_delay_ms(),
            color: true,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_request_delay_ms() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://access.redhat.com/hydra/rest");
        assert_eq!(config.api.version, "v1");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.request_delay(), Duration::from_millis(500));
        assert!(config.settings.color);
        assert!(config.auth.bearer_token.is_none());
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml = r#"
            [auth]
            bearer_token = "eyJhbGci.payload.sig"

            [settings]
            request_delay_ms = 0
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.auth.bearer_token.as_deref(), Some("eyJhbGci.payload.sig"));
        assert_eq!(config.settings.request_delay_ms, 0);
        assert!(config.settings.color);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_parse_oauth_with_default_token_url() {
        let toml = r#"
            [auth.oauth]
            client_id = "svc-casepull"
            client_secret = "s3cret"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        let oauth = config.auth.oauth.unwrap();
        assert_eq!(oauth.client_id, "svc-casepull");
        assert_eq!(oauth.token_url, DEFAULT_TOKEN_URL);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.auth.bearer_token = Some("abc".to_string());
        config.settings.color = false;
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_unreadable_config_names_path() {
        let dir = TempDir::new().unwrap();
        // A directory exists but cannot be read as a file
        let path = dir.path().join("config.toml");
        fs::create_dir(&path).unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_malformed_config_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api]\ntimeout_secs = 0\n").unwrap();

        let result = Config::load(Some(&path));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("timeout_secs")));
    }

    #[test]
    fn test_api_settings() {
        let config = Config::default();
        let settings = config.api_settings();
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.base_url, config.api.base_url);
    }
}
