//! Error types for the CLI application.

use crate::export::WriteError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors. Every variant aborts the run with exit code 1.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error (missing keys, malformed documents)
    #[error("Configuration error: {0}")]
    Config(String),

    /// No usable credential could be found
    #[error("No credential configured. {0}")]
    MissingCredential(String),

    /// Input file could not be read
    #[error("Cannot read input '{path}': {source}")]
    Input {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error(transparent)]
    Write(#[from] WriteError),

    /// Not a single case was fetched
    #[error("No cases were successfully fetched ({failed} failed)")]
    NoCasesFetched {
        /// Number of failed identifiers
        failed: usize,
    },

    /// A single-case request failed
    #[error("Case {case}: {source}")]
    Fetch {
        /// Case that failed
        case: String,
        /// Classified failure
        source: casepull_domain::FetchError,
    },

    /// SDK error
    #[error("SDK error: {0}")]
    Sdk(#[from] casepull_sdk::SdkError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
