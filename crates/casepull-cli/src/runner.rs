//! Sequential batch runner.
//!
//! Fetches each case in input order, extracts the requested columns from the
//! successes and records the failures. Requests never overlap; consecutive
//! requests are separated by a fixed pause.

use casepull_domain::{CaseId, CaseSource, FetchError, OutputRow};
use casepull_extractor::{ColumnWarning, FieldExtractor};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Pause between consecutive requests unless configured otherwise.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(500);

/// Batch runner settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Pause between the end of one case and the start of the next
    pub request_delay: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }
}

/// Progress callbacks. All methods default to doing nothing.
pub trait RunObserver {
    /// Called before case `index` (1-based) of `total` is requested
    fn on_fetch_start(&mut self, _index: usize, _total: usize, _id: &CaseId) {}

    /// Called after a case was fetched and extracted
    fn on_success(&mut self, _id: &CaseId, _warnings: &[ColumnWarning]) {}

    /// Called after a case failed
    fn on_failure(&mut self, _id: &CaseId, _error: &FetchError) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// A case that could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    /// Case identifier
    pub case_id: CaseId,

    /// Classified failure
    pub error: FetchError,
}

/// Everything a batch produced.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// One row per successful case, in input order
    pub rows: Vec<OutputRow>,

    /// One entry per failed case, in input order
    pub failures: Vec<CaseFailure>,

    /// Column-level problems downgraded to `N/A` / `ERROR`
    pub warnings: Vec<ColumnWarning>,
}

impl BatchOutcome {
    /// Number of identifiers processed
    pub fn total(&self) -> usize {
        self.rows.len() + self.failures.len()
    }

    /// Whether no case succeeded
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether any failure was an expired credential
    pub fn has_auth_failures(&self) -> bool {
        self.failures.iter().any(|f| f.error.is_auth())
    }

    /// Identifiers that failed, in input order
    pub fn failed_ids(&self) -> Vec<&CaseId> {
        self.failures.iter().map(|f| &f.case_id).collect()
    }
}

/// Runs a batch of case ids through a [`CaseSource`] and a [`FieldExtractor`].
pub struct BatchRunner<S> {
    source: S,
    extractor: FieldExtractor,
    config: RunnerConfig,
}

impl<S: CaseSource> BatchRunner<S> {
    /// Create a runner.
    pub fn new(source: S, extractor: FieldExtractor, config: RunnerConfig) -> Self {
        Self {
            source,
            extractor,
            config,
        }
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Process `ids` in order. Every id ends up in exactly one of
    /// `rows` / `failures`; nothing is retried.
    pub async fn run(
        &self,
        ids: &[CaseId],
        columns: &[String],
        observer: &mut impl RunObserver,
    ) -> BatchOutcome {
        let total = ids.len();
        let mut outcome = BatchOutcome::default();
        info!("Starting batch of {} cases ({} columns)", total, columns.len());

        for (index, id) in ids.iter().enumerate() {
            if index > 0 && !self.config.request_delay.is_zero() {
                tokio::time::sleep(self.config.request_delay).await;
            }

            observer.on_fetch_start(index + 1, total, id);
            debug!("Fetching case {} ({}/{})", id, index + 1, total);

            match self.source.fetch_case(id).await {
                Ok(record) => {
                    let extracted = self.extractor.extract(id, &record, columns);
                    observer.on_success(id, &extracted.warnings);
                    outcome.rows.push(extracted.row);
                    outcome.warnings.extend(extracted.warnings);
                }
                Err(error) => {
                    warn!(kind = error.kind(), "Case {} failed: {}", id, error);
                    observer.on_failure(id, &error);
                    outcome.failures.push(CaseFailure {
                        case_id: id.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            "Batch finished: {} succeeded, {} failed",
            outcome.rows.len(),
            outcome.failures.len()
        );
        outcome
    }
}
