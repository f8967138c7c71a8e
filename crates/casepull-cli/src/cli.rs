//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// casepull - Export support cases to CSV.
#[derive(Debug, Parser)]
#[command(name = "casepull")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (default: ~/.casepull/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Bearer token, overriding the configured credential
    #[arg(long, env = "CASEPULL_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the cases listed in a file (one id per line) and write a CSV
    Fetch(FetchArgs),

    /// Run a batch described by a JSON or TOML run document
    Run(RunArgs),

    /// List the columns that can be requested
    Columns,

    /// Fetch one case and show its raw fields
    Inspect(InspectArgs),

    /// Write a default configuration file
    Init(InitArgs),
}

/// Arguments for the fetch command.
#[derive(Debug, Parser)]
pub struct FetchArgs {
    /// File with one case id per line (`-` for stdin)
    pub input: PathBuf,

    /// Output CSV file (default: cases_YYYYMMDD_HHMMSS.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Comma-separated columns to extract (default: the standard nine)
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// Run document (`.json` or `.toml`)
    pub document: PathBuf,
}

/// Arguments for the inspect command.
#[derive(Debug, Parser)]
pub struct InspectArgs {
    /// Case id
    pub case: String,

    /// Only print the field table, not the raw JSON
    #[arg(long)]
    pub fields_only: bool,
}

/// Arguments for the init command.
#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Log filter implied by `-v` flags, used when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "error",
            1 => "info",
            _ => "debug",
        }
    }
}
