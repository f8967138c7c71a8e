//! Init command implementation.

use crate::cli::InitArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Token value written by `init`; treated as "not configured" until replaced.
pub const TOKEN_PLACEHOLDER: &str = "YOUR_TOKEN_HERE";

/// Execute the init command.
pub fn execute_init(
    args: &InitArgs,
    path: Option<&Path>,
    formatter: &Formatter,
) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_path()?,
    };

    if path.exists() && !args.force {
        return Err(CliError::Config(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }

    template().save(&path)?;

    println!(
        "{}",
        formatter.success(&format!("Wrote configuration to {}", path.display()))
    );
    println!(
        "{}",
        formatter.info("Set auth.bearer_token (or [auth.oauth] / [auth.basic]) before fetching.")
    );
    Ok(path)
}

/// Default configuration with a placeholder token.
pub fn template() -> Config {
    let mut config = Config::default();
    config.auth.bearer_token = Some(TOKEN_PLACEHOLDER.to_string());
    config
}
