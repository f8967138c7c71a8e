//! Core FieldExtractor implementation

use crate::catalog::{catalog, ColumnDef, ERROR_MARKER, NOT_AVAILABLE};
use crate::config::ExtractorConfig;
use crate::error::ExtractionError;
use casepull_domain::{CaseId, CaseRecord, OutputRow};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

/// A column-level problem that was downgraded to a placeholder value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnWarning {
    /// The requested column is not in the catalog; the cell holds `"N/A"`
    UnknownColumn {
        /// Case being extracted
        case_id: CaseId,
        /// Requested column name
        column: String,
    },

    /// The column's extraction function failed; the cell holds `"ERROR"`
    ExtractionFailed {
        /// Case being extracted
        case_id: CaseId,
        /// Column name
        column: String,
        /// What went wrong
        error: ExtractionError,
    },
}

impl fmt::Display for ColumnWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnWarning::UnknownColumn { case_id, column } => {
                write!(f, "case {}: unknown column '{}'", case_id, column)
            }
            ColumnWarning::ExtractionFailed {
                case_id,
                column,
                error,
            } => write!(f, "case {}: error extracting '{}': {}", case_id, column, error),
        }
    }
}

/// Result of extracting one record
#[derive(Debug, Clone)]
pub struct ExtractedRow {
    /// One cell per requested column, in request order
    pub row: OutputRow,

    /// Problems downgraded to placeholders while building the row
    pub warnings: Vec<ColumnWarning>,
}

/// Maps raw case records to output rows through the column catalog
pub struct FieldExtractor {
    config: ExtractorConfig,
    columns: HashMap<&'static str, &'static ColumnDef>,
}

impl FieldExtractor {
    /// Create a new FieldExtractor, registering the full catalog
    pub fn new(config: ExtractorConfig) -> Self {
        let columns = catalog().iter().map(|column| (column.name, column)).collect();
        Self { config, columns }
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Whether a column name is in the catalog
    pub fn is_known(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Requested names that are not in the catalog, in request order
    pub fn unknown_columns<'a>(&self, columns: &'a [String]) -> Vec<&'a str> {
        columns
            .iter()
            .map(String::as_str)
            .filter(|name| !self.is_known(name))
            .collect()
    }

    /// Catalog entry for a column name
    pub fn column(&self, name: &str) -> Option<&'static ColumnDef> {
        self.columns.get(name).copied()
    }

    /// Catalog column names sorted alphabetically
    pub fn available_columns(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.columns.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Extract the requested columns from a record
    ///
    /// Never fails as a whole. Each requested name produces exactly one cell:
    /// the column's value, `"N/A"` for a name outside the catalog, or
    /// `"ERROR"` when the column's function fails. Each substitution is
    /// logged and returned as a [`ColumnWarning`].
    pub fn extract(
        &self,
        case_id: &CaseId,
        record: &CaseRecord,
        columns: &[String],
    ) -> ExtractedRow {
        let mut row = OutputRow::new(case_id.clone());
        let mut warnings = Vec::new();

        for name in columns {
            let value = match self.columns.get(name.as_str()) {
                Some(column) => match column.extract(record, &self.config) {
                    Ok(value) => value,
                    Err(error) => {
                        warn!(case = %case_id, column = %name, %error, "Column extraction failed");
                        warnings.push(ColumnWarning::ExtractionFailed {
                            case_id: case_id.clone(),
                            column: name.clone(),
                            error,
                        });
                        ERROR_MARKER.to_string()
                    }
                },
                None => {
                    warn!(case = %case_id, column = %name, "Unknown column");
                    warnings.push(ColumnWarning::UnknownColumn {
                        case_id: case_id.clone(),
                        column: name.clone(),
                    });
                    NOT_AVAILABLE.to_string()
                }
            };
            row.push(name.as_str(), value);
        }

        ExtractedRow { row, warnings }
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}
