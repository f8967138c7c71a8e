//! casepull CLI library.
//!
//! Core functionality for the `casepull` command-line tool: configuration and
//! credential loading, input parsing, the sequential batch runner, CSV export
//! and terminal output formatting.

pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod output;
pub mod runner;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use runner::{BatchOutcome, BatchRunner, CaseFailure, RunObserver, RunnerConfig};
