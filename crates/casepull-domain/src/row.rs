//! Output rows - display values for one fetched case

use crate::case::CaseId;

/// Extracted display values for one successfully fetched case
///
/// Cells are kept in the exact order the columns were requested, including
/// any repeated column names, so the row always lines up with the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    /// Case the row was extracted from
    pub case_id: CaseId,

    cells: Vec<(String, String)>,
}

impl OutputRow {
    /// Create an empty row for a case
    pub fn new(case_id: CaseId) -> Self {
        Self {
            case_id,
            cells: Vec::new(),
        }
    }

    /// Append a column value
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.push((column.into(), value.into()));
    }

    /// Value of the first cell with the given column name
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names in row order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    /// Values in row order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, value)| value.as_str())
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
