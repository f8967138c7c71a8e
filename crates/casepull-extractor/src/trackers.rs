//! Jira link extraction from a record's external tracker list

use casepull_domain::CaseRecord;

/// Number of Jira link columns
pub const TRACKER_SLOTS: usize = 3;

/// Sentinel for an empty link slot
pub const NO_LINK: &str = "None";

/// Extract up to three Jira links, padded with `"None"`
///
/// Keeps eligible entries only (system tag `Jira`, non-empty key and URL),
/// in source order without sorting or deduplication, formatted as
/// `[KEY|URL]`. A missing or malformed tracker list reads as empty, so this
/// never fails.
pub fn extract_tracker_links(record: &CaseRecord) -> [String; TRACKER_SLOTS] {
    let mut links = record
        .tracker_references()
        .into_iter()
        .filter(|tracker| tracker.is_eligible())
        .map(|tracker| tracker.link());

    std::array::from_fn(|_| links.next().unwrap_or_else(|| NO_LINK.to_string()))
}

/// The filled link slots joined with `", "` (empty when there are none)
pub fn all_tracker_links(record: &CaseRecord) -> String {
    extract_tracker_links(record)
        .into_iter()
        .filter(|link| link != NO_LINK)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(trackers: Value) -> CaseRecord {
        CaseRecord::from_value(json!({ "externalTrackers": trackers })).unwrap()
    }

    fn jira(key: &str, url: &str) -> Value {
        json!({"system": "Jira", "resourceKey": key, "resourceURL": url})
    }

    #[test]
    fn test_no_trackers_pads_all_slots() {
        let links = extract_tracker_links(&CaseRecord::default());
        assert_eq!(links, ["None", "None", "None"]);
    }

    #[test]
    fn test_filters_and_preserves_order() {
        let links = extract_tracker_links(&record(json!([
            jira("AB-1", "http://x"),
            {"system": "Other", "resourceKey": "Z", "resourceURL": "http://y"},
            jira("AB-2", "http://z"),
        ])));
        assert_eq!(links, ["[AB-1|http://x]", "[AB-2|http://z]", "None"]);
    }

    #[test]
    fn test_truncates_to_first_three() {
        let links = extract_tracker_links(&record(json!([
            jira("A-1", "u1"),
            jira("A-2", "u2"),
            jira("A-3", "u3"),
            jira("A-4", "u4"),
        ])));
        assert_eq!(links, ["[A-1|u1]", "[A-2|u2]", "[A-3|u3]"]);
    }

    #[test]
    fn test_ineligible_entries_skipped_anywhere() {
        let links = extract_tracker_links(&record(json!([
            {"system": "Jira", "resourceKey": "", "resourceURL": "http://empty-key"},
            jira("A-1", "u1"),
            {"system": "Jira", "resourceKey": "NO-URL"},
            "garbage",
            {"system": "jira", "resourceKey": "LOWER", "resourceURL": "u"},
            jira("A-2", "u2"),
        ])));
        assert_eq!(links, ["[A-1|u1]", "[A-2|u2]", "None"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let links = extract_tracker_links(&record(json!([jira("A-1", "u1"), jira("A-1", "u1")])));
        assert_eq!(links, ["[A-1|u1]", "[A-1|u1]", "None"]);
    }

    #[test]
    fn test_all_links_joined() {
        let rec = record(json!([jira("A-1", "u1"), jira("A-2", "u2")]));
        assert_eq!(all_tracker_links(&rec), "[A-1|u1], [A-2|u2]");
        assert_eq!(all_tracker_links(&CaseRecord::default()), "");
    }

    #[test]
    fn test_always_three_entries_for_any_eligible_count() {
        for count in 0..6 {
            let entries: Vec<Value> = (0..count)
                .map(|i| jira(&format!("K-{}", i), &format!("u{}", i)))
                .collect();
            let links = extract_tracker_links(&record(Value::Array(entries)));

            assert_eq!(links.len(), TRACKER_SLOTS);
            for (slot, link) in links.iter().enumerate() {
                if slot < count {
                    assert_eq!(link, &format!("[K-{}|u{}]", slot, slot));
                } else {
                    assert_eq!(link, NO_LINK);
                }
            }
        }
    }
}
