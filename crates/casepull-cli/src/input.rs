//! Input loading: case-id lists and run documents.

use crate::error::{CliError, Result};
use casepull_domain::CaseId;
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Parse a newline-separated case-id list.
///
/// Lines are trimmed; blank lines and `#` comments are skipped. Order and
/// duplicates are preserved.
pub fn parse_case_ids(contents: &str) -> Vec<CaseId> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(CaseId::from)
        .collect()
}

/// Read a case-id list from `path`, or from stdin when `path` is `-`.
pub fn read_case_ids(path: &Path) -> Result<Vec<CaseId>> {
    let contents = read_source(path)?;
    Ok(parse_case_ids(&contents))
}

/// A batch described in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunDocument {
    /// Cases to fetch, in order
    pub cases: Vec<CaseId>,

    /// Columns to extract, in order
    pub columns: Vec<String>,

    /// Destination file; a timestamped name is used when absent
    pub output_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawRunDocument {
    cases: Option<Vec<String>>,
    columns: Option<Vec<String>>,
    output_file: Option<PathBuf>,
}

impl RunDocument {
    /// Load a run document. `.toml` files are parsed as TOML, anything else
    /// as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = read_source(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let parsed = if is_toml {
            Self::from_toml(&contents)
        } else {
            Self::from_json(&contents)
        };

        parsed.map_err(|e| {
            let detail = match e {
                CliError::Config(msg) => msg,
                CliError::Serialization(e) => e.to_string(),
                CliError::Toml(e) => e.to_string(),
                other => other.to_string(),
            };
            CliError::Config(format!("{}: {}", path.display(), detail))
        })
    }

    /// Parse a JSON run document.
    pub fn from_json(contents: &str) -> Result<Self> {
        let raw: RawRunDocument = serde_json::from_str(contents)?;
        raw.finish()
    }

    /// Parse a TOML run document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let raw: RawRunDocument = toml::from_str(contents)?;
        raw.finish()
    }
}

impl RawRunDocument {
    fn finish(self) -> Result<RunDocument> {
        let cases = self
            .cases
            .ok_or_else(|| CliError::Config("run document is missing 'cases'".into()))?;
        let columns = self
            .columns
            .ok_or_else(|| CliError::Config("run document is missing 'columns'".into()))?;

        Ok(RunDocument {
            cases: cases
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(CaseId::from)
                .collect(),
            columns,
            output_file: self.output_file,
        })
    }
}

fn read_source(path: &Path) -> Result<String> {
    let input_err = |source| CliError::Input {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .map_err(input_err)?;
        return Ok(contents);
    }

    fs::read_to_string(path).map_err(input_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ids(list: &[CaseId]) -> Vec<&str> {
        list.iter().map(CaseId::as_str).collect()
    }

    #[test]
    fn test_parse_case_ids() {
        let contents = "04257923\n\n  03978123  \n# escalations\n04257923\n";
        assert_eq!(
            ids(&parse_case_ids(contents)),
            vec!["04257923", "03978123", "04257923"]
        );
    }

    #[test]
    fn test_parse_crlf() {
        assert_eq!(ids(&parse_case_ids("1\r\n2\r\n")), vec!["1", "2"]);
    }

    #[test]
    fn test_read_case_ids_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cases.txt");
        fs::write(&path, "111\n222\n").unwrap();

        assert_eq!(ids(&read_case_ids(&path).unwrap()), vec!["111", "222"]);
    }

    #[test]
    fn test_missing_input_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");

        let err = read_case_ids(&path).unwrap_err();
        assert!(matches!(err, CliError::Input { path: p, .. } if p == path));
    }

    #[test]
    fn test_run_document_json() {
        let doc = RunDocument::from_json(
            r#"{
                "cases": ["111", " 222 ", ""],
                "columns": ["Case Number", "Status"],
                "output_file": "out.csv"
            }"#,
        )
        .unwrap();

        assert_eq!(ids(&doc.cases), vec!["111", "222"]);
        assert_eq!(doc.columns, vec!["Case Number", "Status"]);
        assert_eq!(doc.output_file, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn test_run_document_missing_columns() {
        let err = RunDocument::from_json(r#"{"cases": ["111"]}"#).unwrap_err();
        assert!(matches!(err, CliError::Config(msg) if msg.contains("columns")));
    }

    #[test]
    fn test_run_document_numeric_case_rejected() {
        let err = RunDocument::from_json(r#"{"cases": [111], "columns": []}"#).unwrap_err();
        assert!(matches!(err, CliError::Serialization(_)));
    }

    #[test]
    fn test_malformed_run_document_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weekly-run.json");
        fs::write(&path, r#"{"cases": ["111", "222""#).unwrap();

        let err = RunDocument::load(&path).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("weekly-run.json"));
    }

    #[test]
    fn test_missing_key_names_path_and_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weekly-run.toml");
        fs::write(&path, "cases = [\"111\"]\n").unwrap();

        let msg = RunDocument::load(&path).unwrap_err().to_string();
        assert!(msg.contains("weekly-run.toml"));
        assert!(msg.contains("'columns'"));
    }

    #[test]
    fn test_run_document_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weekly.toml");
        fs::write(
            &path,
            "cases = [\"111\"]\ncolumns = [\"Case Number\", \"Jira-1\"]\n",
        )
        .unwrap();

        let doc = RunDocument::load(&path).unwrap();
        assert_eq!(ids(&doc.cases), vec!["111"]);
        assert_eq!(doc.columns, vec!["Case Number", "Jira-1"]);
        assert!(doc.output_file.is_none());
    }
}
