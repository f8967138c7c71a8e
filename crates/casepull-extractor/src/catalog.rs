//! The column catalog
//!
//! One entry per output column the tool knows how to produce. Entries are
//! plain function pointers so the table can live in a `static`.

use crate::config::ExtractorConfig;
use crate::error::ExtractionError;
use crate::trackers::{all_tracker_links, extract_tracker_links};
use casepull_domain::CaseRecord;
use serde_json::Value;

/// Placeholder for absent fields and unknown columns
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for a column whose extraction failed
pub const ERROR_MARKER: &str = "ERROR";

/// Extraction function for one column
pub type ColumnFn = fn(&CaseRecord, &ExtractorConfig) -> Result<String, ExtractionError>;

/// A named output column and the function that derives it
#[derive(Clone, Copy)]
pub struct ColumnDef {
    /// Header name, as requested by the operator
    pub name: &'static str,
    /// One-line explanation of the source field
    pub source: &'static str,
    extract: ColumnFn,
}

impl ColumnDef {
    const fn new(name: &'static str, source: &'static str, extract: ColumnFn) -> Self {
        Self {
            name,
            source,
            extract,
        }
    }

    /// Run the extraction function
    pub fn extract(
        &self,
        record: &CaseRecord,
        config: &ExtractorConfig,
    ) -> Result<String, ExtractionError> {
        (self.extract)(record, config)
    }
}

impl std::fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnDef")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish()
    }
}

/// Columns written when the operator does not choose any
pub const DEFAULT_COLUMNS: &[&str] = &[
    "Case Number",
    "Account",
    "Status",
    "Support Type",
    "Severity",
    "Description",
    "Jira-1",
    "Jira-2",
    "Jira-3",
];

static CATALOG: &[ColumnDef] = &[
    // Basic fields
    ColumnDef::new("Case Number", "caseNumber", |r, _| text(r, "caseNumber")),
    ColumnDef::new("Account", "accountNumberRef", |r, _| text(r, "accountNumberRef")),
    ColumnDef::new("Account Name", "accountName", |r, _| text(r, "accountName")),
    ColumnDef::new("Status", "status", |r, _| text(r, "status")),
    ColumnDef::new("Internal Status", "internalStatus", |r, _| text(r, "internalStatus")),
    ColumnDef::new("Support Type", "caseType", |r, _| text(r, "caseType")),
    ColumnDef::new("Severity", "severity", |r, _| text(r, "severity")),
    ColumnDef::new("Priority Score", "priorityScore", |r, _| text(r, "priorityScore")),
    // Descriptions
    ColumnDef::new("Summary", "summary", |r, _| text(r, "summary")),
    ColumnDef::new(
        "Description",
        "summary, falling back to description; use Detailed Description for the raw text",
        |r, _| text_or(r, "summary", "description"),
    ),
    ColumnDef::new("Detailed Description", "description", |r, _| text(r, "description")),
    ColumnDef::new("Issue", "issue", |r, _| text(r, "issue")),
    ColumnDef::new("Environment", "environment", |r, _| text(r, "environment")),
    // Product
    ColumnDef::new("Product", "product", |r, _| text(r, "product")),
    ColumnDef::new("Version", "version", |r, _| text(r, "version")),
    // Contacts
    ColumnDef::new("Contact Name", "contactName", |r, _| text(r, "contactName")),
    ColumnDef::new("Contact SSO", "contactSSOName", |r, _| text(r, "contactSSOName")),
    ColumnDef::new("Owner", "ownerId", |r, _| text(r, "ownerId")),
    ColumnDef::new("Created By", "createdById", |r, _| text(r, "createdById")),
    // Dates
    ColumnDef::new("Created Date", "createdDate", |r, _| text(r, "createdDate")),
    ColumnDef::new("Last Modified Date", "lastModifiedDate", |r, _| text(r, "lastModifiedDate")),
    ColumnDef::new("Last Closed At", "lastClosedAt", |r, _| text(r, "lastClosedAt")),
    // Jira links
    ColumnDef::new("Jira-1", "externalTrackers (1st Jira link)", |r, _| Ok(jira_slot(r, 0))),
    ColumnDef::new("Jira-2", "externalTrackers (2nd Jira link)", |r, _| Ok(jira_slot(r, 1))),
    ColumnDef::new("Jira-3", "externalTrackers (3rd Jira link)", |r, _| Ok(jira_slot(r, 2))),
    ColumnDef::new("All Jira Links", "externalTrackers (all Jira links)", |r, _| {
        Ok(all_tracker_links(r))
    }),
    // Technical details
    ColumnDef::new("OpenShift Cluster ID", "openshiftClusterID", |r, _| {
        text(r, "openshiftClusterID")
    }),
    ColumnDef::new("SBR Groups", "sbrGroups", |r, _| joined_list(r, "sbrGroups")),
    ColumnDef::new("Case Language", "caseLanguage", |r, _| text(r, "caseLanguage")),
    ColumnDef::new("Origin", "origin", |r, _| text(r, "origin")),
    // Flags
    ColumnDef::new("Is Closed", "isClosed", |r, _| flag(r, "isClosed")),
    ColumnDef::new("FTS", "fts", |r, _| flag(r, "fts")),
    ColumnDef::new("Customer Escalation", "customerEscalation", |r, _| {
        flag(r, "customerEscalation")
    }),
    ColumnDef::new("Strategic Account", "isStrategicAccount", |r, _| flag(r, "isStrategicAccount")),
    // SLA
    ColumnDef::new("Entitlement SLA", "entitlementSla", |r, _| text(r, "entitlementSla")),
    ColumnDef::new("SBT", "sbt", |r, _| text(r, "sbt")),
    // Links back to the portal
    ColumnDef::new("Case URL", "portal URL built from caseNumber", case_url),
];

/// The full column catalog, in registration order
pub fn catalog() -> &'static [ColumnDef] {
    CATALOG
}

/// Render a scalar field, `"N/A"` when absent or null
fn text(record: &CaseRecord, key: &str) -> Result<String, ExtractionError> {
    match record.get(key) {
        None => Ok(NOT_AVAILABLE.to_string()),
        Some(value) => scalar(key, value),
    }
}

/// Render `primary` unless it is absent or renders empty, else `fallback`
fn text_or(record: &CaseRecord, primary: &str, fallback: &str) -> Result<String, ExtractionError> {
    if let Some(value) = record.get(primary) {
        let rendered = scalar(primary, value)?;
        if !rendered.is_empty() {
            return Ok(rendered);
        }
    }
    text(record, fallback)
}

/// Render a boolean flag as `True`/`False`; absent reads as `False`
fn flag(record: &CaseRecord, key: &str) -> Result<String, ExtractionError> {
    match record.get(key) {
        None => Ok(display_bool(false)),
        Some(Value::Bool(b)) => Ok(display_bool(*b)),
        Some(other) => Err(shape(key, "a boolean", other)),
    }
}

/// Join a list of strings with `", "`; absent or empty reads as `"N/A"`
fn joined_list(record: &CaseRecord, key: &str) -> Result<String, ExtractionError> {
    let items = match record.get(key) {
        None => return Ok(NOT_AVAILABLE.to_string()),
        Some(Value::Array(items)) if items.is_empty() => return Ok(NOT_AVAILABLE.to_string()),
        Some(Value::Array(items)) => items,
        Some(other) => return Err(shape(key, "a list", other)),
    };

    let parts = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().ok_or_else(|| ExtractionError::InvalidElement {
                field: key.to_string(),
                index,
                found: json_kind(item),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(parts.join(", "))
}

fn jira_slot(record: &CaseRecord, slot: usize) -> String {
    let [first, second, third] = extract_tracker_links(record);
    match slot {
        0 => first,
        1 => second,
        _ => third,
    }
}

fn case_url(record: &CaseRecord, config: &ExtractorConfig) -> Result<String, ExtractionError> {
    let case_number = match record.get("caseNumber") {
        None => String::new(),
        Some(value) => scalar("caseNumber", value)?,
    };
    Ok(format!("{}{}", config.case_url_prefix, case_number))
}

fn scalar(key: &str, value: &Value) -> Result<String, ExtractionError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(display_bool(*b)),
        Value::Null => Ok(NOT_AVAILABLE.to_string()),
        other => Err(shape(key, "a scalar", other)),
    }
}

// Booleans render capitalised: True / False
fn display_bool(b: bool) -> String {
    let rendered = if b { "True" } else { "False" };
    rendered.to_string()
}

fn shape(key: &str, expected: &'static str, found: &Value) -> ExtractionError {
    ExtractionError::UnexpectedShape {
        field: key.to_string(),
        expected,
        found: json_kind(found),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn record(value: Value) -> CaseRecord {
        CaseRecord::from_value(value).unwrap()
    }

    fn column(name: &str) -> &'static ColumnDef {
        catalog().iter().find(|c| c.name == name).unwrap()
    }

    fn run(name: &str, rec: &CaseRecord) -> Result<String, ExtractionError> {
        column(name).extract(rec, &ExtractorConfig::default())
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let names: HashSet<_> = catalog().iter().map(|c| c.name).collect();
        assert_eq!(names.len(), catalog().len());
    }

    #[test]
    fn test_description_points_to_raw_column() {
        let description = column("Description");
        assert!(description.source.contains("Detailed Description"));
        assert_eq!(column("Detailed Description").source, "description");
    }

    #[test]
    fn test_default_columns_are_in_catalog() {
        for name in DEFAULT_COLUMNS {
            assert!(catalog().iter().any(|c| c.name == *name), "missing {}", name);
        }
    }

    #[test]
    fn test_text_renders_scalars() {
        let rec = record(json!({"status": "Closed", "priorityScore": 120, "severity": null}));
        assert_eq!(run("Status", &rec).unwrap(), "Closed");
        assert_eq!(run("Priority Score", &rec).unwrap(), "120");
        assert_eq!(run("Severity", &rec).unwrap(), "N/A");
        assert_eq!(run("Owner", &rec).unwrap(), "N/A");
    }

    #[test]
    fn test_nested_value_is_an_error() {
        let rec = record(json!({"product": {"name": "OpenShift"}}));
        let err = run("Product", &rec).unwrap_err();
        assert_eq!(
            err,
            ExtractionError::UnexpectedShape {
                field: "product".to_string(),
                expected: "a scalar",
                found: "an object",
            }
        );
    }

    #[test]
    fn test_description_prefers_summary() {
        let both = record(json!({"summary": "Short", "description": "Long text"}));
        assert_eq!(run("Description", &both).unwrap(), "Short");
        assert_eq!(run("Detailed Description", &both).unwrap(), "Long text");

        let empty_summary = record(json!({"summary": "", "description": "Long text"}));
        assert_eq!(run("Description", &empty_summary).unwrap(), "Long text");

        assert_eq!(run("Description", &record(json!({}))).unwrap(), "N/A");
    }

    #[test]
    fn test_flags() {
        let rec = record(json!({"isClosed": true, "fts": false, "customerEscalation": "yes"}));
        assert_eq!(run("Is Closed", &rec).unwrap(), "True");
        assert_eq!(run("FTS", &rec).unwrap(), "False");
        assert_eq!(run("Strategic Account", &rec).unwrap(), "False");
        assert!(run("Customer Escalation", &rec).is_err());
    }

    #[test]
    fn test_sbr_groups() {
        let rec = record(json!({"sbrGroups": ["Networking", "Storage"]}));
        assert_eq!(run("SBR Groups", &rec).unwrap(), "Networking, Storage");

        assert_eq!(run("SBR Groups", &record(json!({"sbrGroups": []}))).unwrap(), "N/A");
        assert_eq!(run("SBR Groups", &record(json!({}))).unwrap(), "N/A");

        let bad = record(json!({"sbrGroups": ["Networking", 7]}));
        assert_eq!(
            run("SBR Groups", &bad).unwrap_err(),
            ExtractionError::InvalidElement {
                field: "sbrGroups".to_string(),
                index: 1,
                found: "a number",
            }
        );
    }

    #[test]
    fn test_case_url() {
        let rec = record(json!({"caseNumber": "04257923"}));
        assert_eq!(
            run("Case URL", &rec).unwrap(),
            "https://access.redhat.com/support/cases/#/case/04257923"
        );

        let config = ExtractorConfig {
            case_url_prefix: "https://portal.example.com/c/".to_string(),
        };
        assert_eq!(
            column("Case URL").extract(&record(json!({})), &config).unwrap(),
            "https://portal.example.com/c/"
        );
    }

    #[test]
    fn test_jira_slots() {
        let rec = record(json!({"externalTrackers": [
            {"system": "Jira", "resourceKey": "AB-1", "resourceURL": "http://x"}
        ]}));
        assert_eq!(run("Jira-1", &rec).unwrap(), "[AB-1|http://x]");
        assert_eq!(run("Jira-2", &rec).unwrap(), "None");
        assert_eq!(run("Jira-3", &rec).unwrap(), "None");
        assert_eq!(run("All Jira Links", &rec).unwrap(), "[AB-1|http://x]");
    }
}
