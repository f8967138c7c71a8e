//! casepull Extractor
//!
//! Turns raw case records into display rows using a closed catalog of named
//! columns.
//!
//! # Overview
//!
//! Every output column is a pair of a name and a pure extraction function
//! over [`CaseRecord`](casepull_domain::CaseRecord). The catalog is a static
//! table registered once when a [`FieldExtractor`] is built; derived columns
//! (Jira links, the case URL) are ordinary entries built on plain field
//! lookups and [`extract_tracker_links`].
//!
//! # Guarantees
//!
//! - Every requested column appears exactly once per request, in request order
//! - An unknown column becomes `"N/A"`, a failing column becomes `"ERROR"`;
//!   neither stops the remaining columns
//! - Tracker-link extraction always yields exactly three entries
//!
//! # Example Usage
//!
//! ```
//! use casepull_extractor::FieldExtractor;
//! use casepull_domain::{CaseId, CaseRecord};
//! use serde_json::json;
//!
//! let record = CaseRecord::from_value(json!({
//!     "caseNumber": "04257923",
//!     "severity": "2 (High)",
//! })).unwrap();
//!
//! let extractor = FieldExtractor::default();
//! let columns = vec!["Case Number".to_string(), "Severity".to_string(), "Jira-1".to_string()];
//! let extracted = extractor.extract(&CaseId::new("04257923"), &record, &columns);
//!
//! assert_eq!(extracted.row.get("Severity"), Some("2 (High)"));
//! assert_eq!(extracted.row.get("Jira-1"), Some("None"));
//! assert!(extracted.warnings.is_empty());
//! ```

#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod extractor;
mod trackers;

#[cfg(test)]
mod tests;

pub use catalog::{
    catalog, ColumnDef, ColumnFn, DEFAULT_COLUMNS, ERROR_MARKER, NOT_AVAILABLE,
};
pub use config::{ExtractorConfig, DEFAULT_CASE_URL_PREFIX};
pub use error::ExtractionError;
pub use extractor::{ColumnWarning, ExtractedRow, FieldExtractor};
pub use trackers::{all_tracker_links, extract_tracker_links, NO_LINK, TRACKER_SLOTS};
