//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Prefix of the customer-portal page for a case
pub const DEFAULT_CASE_URL_PREFIX: &str = "https://access.redhat.com/support/cases/#/case/";

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Prefix joined with the case number to build the `Case URL` column
    pub case_url_prefix: String,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.case_url_prefix.trim().is_empty() {
            return Err("case_url_prefix must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            case_url_prefix: DEFAULT_CASE_URL_PREFIX.to_string(),
        }
    }
}
