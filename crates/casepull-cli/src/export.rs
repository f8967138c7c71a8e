//! CSV export of extracted rows.

use casepull_domain::OutputRow;
use casepull_extractor::NOT_AVAILABLE;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Failure writing the output file. Fatal for the run.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The destination (or its directory) could not be created
    #[error("Cannot write '{path}': {source}")]
    Io {
        /// Destination
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The CSV writer failed mid-stream
    #[error("Cannot write CSV to '{path}': {source}")]
    Csv {
        /// Destination
        path: PathBuf,
        /// Underlying error
        source: csv::Error,
    },
}

/// Write `rows` to `dest` with a header of `columns`.
///
/// Cells follow the header order; a column missing from a row is written as
/// `N/A`. Returns the number of data rows written. With no rows nothing is
/// created and `Ok(0)` is returned.
pub fn write_csv(rows: &[OutputRow], columns: &[String], dest: &Path) -> Result<usize, WriteError> {
    if rows.is_empty() {
        debug!("No rows to write; skipping {}", dest.display());
        return Ok(0);
    }

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| WriteError::Io {
            path: dest.to_path_buf(),
            source,
        })?;
    }

    let csv_err = |source: csv::Error| WriteError::Csv {
        path: dest.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(dest).map_err(csv_err)?;
    writer.write_record(columns).map_err(csv_err)?;

    for row in rows {
        let record = columns
            .iter()
            .map(|column| row.get(column).unwrap_or(NOT_AVAILABLE));
        writer.write_record(record).map_err(csv_err)?;
    }

    writer.flush().map_err(|source| WriteError::Io {
        path: dest.to_path_buf(),
        source,
    })?;

    info!("Wrote {} rows to {}", rows.len(), dest.display());
    Ok(rows.len())
}

/// Output file name used when none is given: `cases_YYYYMMDD_HHMMSS.csv`.
pub fn default_output_path(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("cases_{}.csv", now.format("%Y%m%d_%H%M%S")))
}
