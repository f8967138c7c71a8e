//! Run command implementation.

use super::batch::{execute_batch, BatchRequest};
use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::RunDocument;
use crate::output::Formatter;

/// Execute the run command.
pub async fn execute_run(
    args: RunArgs,
    token_override: Option<&str>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let document = RunDocument::load(&args.document)?;
    let request = BatchRequest {
        ids: document.cases,
        columns: document.columns,
        output: document.output_file,
        source_label: args.document.display().to_string(),
    };

    execute_batch(request, token_override, config, formatter).await
}
