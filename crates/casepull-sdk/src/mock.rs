//! Deterministic in-memory case source.

use casepull_domain::{CaseId, CaseRecord, CaseSource, FetchError};
use serde_json::Value;
use std::collections::HashMap;
use std::future::{ready, Future};
use std::sync::{Arc, Mutex};

/// Mock case source for deterministic testing
///
/// Returns pre-configured records or failures without making any network
/// calls. Ids with no configured outcome answer
/// [`FetchError::NotFoundOrForbidden`], like the real API.
///
/// # Examples
///
/// ```
/// use casepull_sdk::MockCaseSource;
/// use casepull_domain::{CaseId, FetchError};
/// use serde_json::json;
///
/// let mut source = MockCaseSource::new();
/// source.add_record("111", json!({"caseNumber": "111"}));
/// source.add_error("333", FetchError::AuthExpired);
/// assert_eq!(source.call_count(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCaseSource {
    outcomes: Arc<Mutex<HashMap<CaseId, Result<CaseRecord, FetchError>>>>,
    calls: Arc<Mutex<Vec<CaseId>>>,
}

impl MockCaseSource {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `id` with a record built from a JSON object
    ///
    /// # Panics
    ///
    /// Panics if `record` is not a JSON object.
    pub fn add_record(&mut self, id: impl Into<CaseId>, record: Value) {
        let record = CaseRecord::from_value(record).expect("mock record must be a JSON object");
        self.outcomes.lock().unwrap().insert(id.into(), Ok(record));
    }

    /// Answer `id` with a failure
    pub fn add_error(&mut self, id: impl Into<CaseId>, error: FetchError) {
        self.outcomes.lock().unwrap().insert(id.into(), Err(error));
    }

    /// Ids requested so far, in call order
    pub fn calls(&self) -> Vec<CaseId> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of fetches performed
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn lookup(&self, id: &CaseId) -> Result<CaseRecord, FetchError> {
        self.calls.lock().unwrap().push(id.clone());
        self.outcomes
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or(Err(FetchError::NotFoundOrForbidden))
    }
}

impl CaseSource for MockCaseSource {
    fn fetch_case(
        &self,
        id: &CaseId,
    ) -> impl Future<Output = Result<CaseRecord, FetchError>> + Send {
        ready(self.lookup(id))
    }
}
