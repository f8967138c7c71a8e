//! Shared batch flow for `fetch` and `run`.

use crate::auth::resolve_credential;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::export::{default_output_path, write_csv};
use crate::output::Formatter;
use crate::runner::{BatchOutcome, BatchRunner, RunObserver, RunnerConfig};
use casepull_domain::{CaseId, CaseSource, FetchError};
use casepull_extractor::{ColumnWarning, FieldExtractor};
use casepull_sdk::CaseClient;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// A batch ready to run.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    /// Cases to fetch, in order
    pub ids: Vec<CaseId>,

    /// Columns to extract, in order
    pub columns: Vec<String>,

    /// Destination; a timestamped name is generated when absent
    pub output: Option<PathBuf>,

    /// Where the ids came from, for the banner
    pub source_label: String,
}

/// Result of a batch that produced a file.
#[derive(Debug)]
pub struct BatchReport {
    /// File written
    pub output: PathBuf,

    /// Rows, failures and warnings
    pub outcome: BatchOutcome,
}

/// Resolve the credential, build the client and run the batch.
pub async fn execute_batch(
    request: BatchRequest,
    token_override: Option<&str>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let extractor = FieldExtractor::new(config.extractor.clone());
    check_request(&request, &extractor, formatter)?;

    let credential = resolve_credential(token_override, &config.auth, config.api.timeout()).await?;
    debug!("Authenticating with {}", credential.scheme());
    let client = CaseClient::new(config.api_settings(), credential)?;

    run_batch(client, extractor, request, config, formatter).await?;
    Ok(())
}

/// Validate the request before anything is fetched.
///
/// Unknown columns are reported but not fatal; they come out as `N/A`.
pub fn check_request(
    request: &BatchRequest,
    extractor: &FieldExtractor,
    formatter: &Formatter,
) -> Result<()> {
    if request.ids.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "No case numbers found in {}",
            request.source_label
        )));
    }
    if request.columns.is_empty() {
        return Err(CliError::InvalidInput("No columns requested".to_string()));
    }

    for column in extractor.unknown_columns(&request.columns) {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "Unknown column '{}' will be written as N/A (see `casepull columns`)",
                column
            ))
        );
    }
    Ok(())
}

/// Run the batch against `source`, print progress and the summary, and write
/// the CSV. Fails with [`CliError::NoCasesFetched`] when nothing succeeded,
/// in which case no file is written.
pub async fn run_batch<S: CaseSource>(
    source: S,
    extractor: FieldExtractor,
    request: BatchRequest,
    config: &Config,
    formatter: &Formatter,
) -> Result<BatchReport> {
    let output = request
        .output
        .unwrap_or_else(|| default_output_path(chrono::Local::now()));

    println!(
        "{}",
        formatter.banner(
            "Support Case Fetcher",
            &[
                ("Input", request.source_label.clone()),
                ("Output", output.display().to_string()),
                ("Cases", request.ids.len().to_string()),
                ("Columns", request.columns.len().to_string()),
            ],
        )
    );
    println!();

    let runner = BatchRunner::new(
        source,
        extractor,
        RunnerConfig {
            request_delay: config.request_delay(),
        },
    );
    let mut progress = ProgressPrinter { formatter };
    let outcome = runner.run(&request.ids, &request.columns, &mut progress).await;

    println!();
    println!("{}", formatter.summary(&outcome));

    if outcome.is_empty() {
        return Err(CliError::NoCasesFetched {
            failed: outcome.failures.len(),
        });
    }

    let written = write_csv(&outcome.rows, &request.columns, &output)?;
    println!();
    println!(
        "{}",
        formatter.success(&format!("Wrote {} cases to {}", written, output.display()))
    );

    Ok(BatchReport { output, outcome })
}

/// Prints one progress line per case.
struct ProgressPrinter<'a> {
    formatter: &'a Formatter,
}

impl RunObserver for ProgressPrinter<'_> {
    fn on_fetch_start(&mut self, index: usize, total: usize, id: &CaseId) {
        print!("{} ", self.formatter.progress(index, total, id));
        let _ = std::io::stdout().flush();
    }

    fn on_success(&mut self, _id: &CaseId, warnings: &[ColumnWarning]) {
        println!("{}", self.formatter.fetch_ok());
        // Unknown columns were reported before the run started
        for warning in warnings
            .iter()
            .filter(|w| matches!(w, ColumnWarning::ExtractionFailed { .. }))
        {
            eprintln!("  {}", self.formatter.column_warning(warning));
        }
    }

    fn on_failure(&mut self, id: &CaseId, error: &FetchError) {
        println!("{}", self.formatter.fetch_failed());
        eprintln!("  {}", self.formatter.fetch_failure(id, error));
    }
}
