//! Fetch command implementation.

use super::batch::{execute_batch, BatchRequest};
use crate::cli::FetchArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::read_case_ids;
use crate::output::Formatter;
use casepull_extractor::DEFAULT_COLUMNS;

/// Execute the fetch command.
pub async fn execute_fetch(
    args: FetchArgs,
    token_override: Option<&str>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let ids = read_case_ids(&args.input)?;
    let request = BatchRequest {
        ids,
        columns: columns_or_default(args.columns),
        output: args.output,
        source_label: args.input.display().to_string(),
    };

    execute_batch(request, token_override, config, formatter).await
}

/// Requested columns, trimmed, or the default set when none were given.
fn columns_or_default(columns: Option<Vec<String>>) -> Vec<String> {
    match columns {
        Some(columns) => columns
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect(),
        None => DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
    }
}
