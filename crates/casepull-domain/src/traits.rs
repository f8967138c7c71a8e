//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{CaseId, CaseRecord, FetchError};
use std::future::Future;

/// Source of raw case records
///
/// Implemented by the infrastructure layer (casepull-sdk). One call is one
/// request; implementations must not retry on their own.
pub trait CaseSource {
    /// Fetch the raw record for a single case
    fn fetch_case(
        &self,
        id: &CaseId,
    ) -> impl Future<Output = Result<CaseRecord, FetchError>> + Send;
}
