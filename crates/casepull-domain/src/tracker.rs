//! External tracker references attached to a case

use crate::case::CaseRecord;
use serde_json::Value;

/// Record field holding the list of external tracker entries
pub const EXTERNAL_TRACKERS_KEY: &str = "externalTrackers";

/// System tag identifying Jira tracker entries
pub const JIRA_SYSTEM: &str = "Jira";

/// A link from a case to an entry in an external issue tracker
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackerReference {
    /// Tracker kind (e.g. "Jira")
    pub system: String,

    /// Key of the linked resource (e.g. "OCPBUGS-1234")
    pub resource_key: String,

    /// URL of the linked resource
    pub resource_url: String,
}

impl TrackerReference {
    /// Read a tracker entry leniently
    ///
    /// Missing or non-string attributes become empty strings, and a
    /// non-object entry yields an all-empty reference (which is never
    /// eligible).
    pub fn from_value(value: &Value) -> Self {
        let attr = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            system: attr("system"),
            resource_key: attr("resourceKey"),
            resource_url: attr("resourceURL"),
        }
    }

    /// Whether this entry counts as a Jira link
    ///
    /// Eligible iff the system tag is exactly [`JIRA_SYSTEM`] and both the
    /// key and the URL are non-empty.
    pub fn is_eligible(&self) -> bool {
        self.system == JIRA_SYSTEM && !self.resource_key.is_empty() && !self.resource_url.is_empty()
    }

    /// Display form: `[KEY|URL]`
    pub fn link(&self) -> String {
        format!("[{}|{}]", self.resource_key, self.resource_url)
    }
}

impl CaseRecord {
    /// All tracker entries on the record, in source order
    ///
    /// An absent, null or non-list field yields no entries.
    pub fn tracker_references(&self) -> Vec<TrackerReference> {
        self.get(EXTERNAL_TRACKERS_KEY)
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(TrackerReference::from_value).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_eligible_jira_entry() {
        let tracker = TrackerReference::from_value(&json!({
            "system": "Jira",
            "resourceKey": "OCPBUGS-1",
            "resourceURL": "https://issues.example.com/browse/OCPBUGS-1"
        }));
        assert!(tracker.is_eligible());
        assert_eq!(
            tracker.link(),
            "[OCPBUGS-1|https://issues.example.com/browse/OCPBUGS-1]"
        );
    }

    #[test]
    fn test_other_system_not_eligible() {
        let tracker = TrackerReference::from_value(&json!({
            "system": "Bugzilla",
            "resourceKey": "12345",
            "resourceURL": "https://bugzilla.example.com/12345"
        }));
        assert!(!tracker.is_eligible());
    }

    #[test]
    fn test_empty_key_or_url_not_eligible() {
        let no_key =
            TrackerReference::from_value(&json!({"system": "Jira", "resourceURL": "http://x"}));
        let no_url = TrackerReference::from_value(
            &json!({"system": "Jira", "resourceKey": "AB-1", "resourceURL": ""}),
        );
        assert!(!no_key.is_eligible());
        assert!(!no_url.is_eligible());
    }

    #[test]
    fn test_non_object_entry_is_empty() {
        let tracker = TrackerReference::from_value(&json!("Jira"));
        assert_eq!(tracker, TrackerReference::default());
    }

    #[test]
    fn test_tracker_references_lenient() {
        let record = CaseRecord::from_value(json!({"externalTrackers": "oops"})).unwrap();
        assert!(record.tracker_references().is_empty());

        let record = CaseRecord::from_value(json!({})).unwrap();
        assert!(record.tracker_references().is_empty());
    }
}
