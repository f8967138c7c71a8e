//! End-to-end tests for record-to-row extraction

use crate::{ColumnWarning, ExtractionError, FieldExtractor, DEFAULT_COLUMNS};
use casepull_domain::{CaseId, CaseRecord};
use serde_json::json;

fn columns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn sample_case() -> CaseRecord {
    CaseRecord::from_value(json!({
        "caseNumber": "04257923",
        "accountNumberRef": "1234567",
        "status": "Waiting on Red Hat",
        "caseType": "Defect / Bug",
        "severity": "2 (High)",
        "summary": "Cluster upgrade stuck at 85%",
        "description": "After starting the upgrade ...",
        "isClosed": false,
        "externalTrackers": [
            {"system": "Jira", "resourceKey": "AB-1", "resourceURL": "http://x"},
            {"system": "Other", "resourceKey": "Z", "resourceURL": "http://y"},
            {"system": "Jira", "resourceKey": "AB-2", "resourceURL": "http://z"}
        ]
    }))
    .unwrap()
}

#[test]
fn test_default_columns_row() {
    let extractor = FieldExtractor::default();
    let extracted = extractor.extract(
        &CaseId::new("04257923"),
        &sample_case(),
        &columns(DEFAULT_COLUMNS),
    );

    let values: Vec<_> = extracted.row.values().collect();
    assert_eq!(
        values,
        vec![
            "04257923",
            "1234567",
            "Waiting on Red Hat",
            "Defect / Bug",
            "2 (High)",
            "Cluster upgrade stuck at 85%",
            "[AB-1|http://x]",
            "[AB-2|http://z]",
            "None",
        ]
    );
    assert!(extracted.warnings.is_empty());
}

#[test]
fn test_row_keys_match_request_exactly() {
    let extractor = FieldExtractor::default();
    let requested = columns(&["Jira-3", "Status", "Nonexistent", "Status", "Case URL"]);
    let extracted = extractor.extract(&CaseId::new("1"), &sample_case(), &requested);

    let keys: Vec<_> = extracted.row.columns().collect();
    assert_eq!(keys, vec!["Jira-3", "Status", "Nonexistent", "Status", "Case URL"]);
    assert_eq!(extracted.row.case_id, CaseId::new("1"));
}

#[test]
fn test_empty_request_gives_empty_row() {
    let extractor = FieldExtractor::default();
    let extracted = extractor.extract(&CaseId::new("1"), &sample_case(), &[]);
    assert!(extracted.row.is_empty());
    assert!(extracted.warnings.is_empty());
}

#[test]
fn test_unknown_column_is_na_and_others_continue() {
    let extractor = FieldExtractor::default();
    let requested = columns(&["Case Number", "Favourite Colour", "Severity"]);
    let extracted = extractor.extract(&CaseId::new("04257923"), &sample_case(), &requested);

    assert_eq!(extracted.row.get("Favourite Colour"), Some("N/A"));
    assert_eq!(extracted.row.get("Severity"), Some("2 (High)"));
    assert_eq!(
        extracted.warnings,
        vec![ColumnWarning::UnknownColumn {
            case_id: CaseId::new("04257923"),
            column: "Favourite Colour".to_string(),
        }]
    );
}

#[test]
fn test_failing_column_is_error_and_others_continue() {
    let record = CaseRecord::from_value(json!({
        "caseNumber": "5",
        "product": {"name": "OpenShift"},
        "isClosed": "maybe",
    }))
    .unwrap();

    let extractor = FieldExtractor::default();
    let requested = columns(&["Product", "Case Number", "Is Closed", "Jira-1"]);
    let extracted = extractor.extract(&CaseId::new("5"), &record, &requested);

    let values: Vec<_> = extracted.row.values().collect();
    assert_eq!(values, vec!["ERROR", "5", "ERROR", "None"]);
    assert_eq!(extracted.warnings.len(), 2);
    assert!(matches!(
        &extracted.warnings[0],
        ColumnWarning::ExtractionFailed {
            column,
            error: ExtractionError::UnexpectedShape { field, .. },
            ..
        } if column == "Product" && field == "product"
    ));
}

#[test]
fn test_record_without_trackers_pads_links() {
    let record = CaseRecord::from_value(json!({"caseNumber": "111"})).unwrap();
    let extractor = FieldExtractor::default();
    let extracted = extractor.extract(
        &CaseId::new("111"),
        &record,
        &columns(&["Jira-1", "Jira-2", "Jira-3", "All Jira Links"]),
    );

    let values: Vec<_> = extracted.row.values().collect();
    assert_eq!(values, vec!["None", "None", "None", ""]);
}

#[test]
fn test_extraction_does_not_mutate_record() {
    let record = sample_case();
    let before = record.clone();
    let extractor = FieldExtractor::default();
    let all: Vec<String> = extractor.available_columns().iter().map(|s| s.to_string()).collect();

    let _ = extractor.extract(&CaseId::new("04257923"), &record, &all);
    assert_eq!(record, before);
}
