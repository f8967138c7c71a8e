//! Error types for column extraction

use thiserror::Error;

/// Why a single column could not be derived from a record
///
/// Never fatal: the extractor substitutes the `"ERROR"` marker and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// A field held a different JSON type than the column can render
    #[error("field '{field}' is {found}, expected {expected}")]
    UnexpectedShape {
        /// Record key that was read
        field: String,
        /// What the column needed
        expected: &'static str,
        /// What the record held
        found: &'static str,
    },

    /// A list field held an element of the wrong type
    #[error("field '{field}' element {index} is {found}, expected a string")]
    InvalidElement {
        /// Record key that was read
        field: String,
        /// Position of the offending element
        index: usize,
        /// What the element was
        found: &'static str,
    },
}
