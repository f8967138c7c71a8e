//! Case module - identifiers and raw records

use serde_json::{Map, Value};
use std::fmt;

/// Opaque identifier naming one support case
///
/// No format is enforced: the remote API is the only authority on what a
/// valid case number looks like. Duplicates are allowed and are fetched once
/// per occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaseId(String);

impl CaseId {
    /// Create a case identifier from any string-like value
    ///
    /// # Examples
    ///
    /// ```
    /// use casepull_domain::CaseId;
    ///
    /// let id = CaseId::new("04257923");
    /// assert_eq!(id.as_str(), "04257923");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CaseId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CaseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Raw case record as returned by the case API
///
/// An unordered mapping from field name to JSON value. The shape is defined
/// by the remote service and is never validated here; a missing key is the
/// normal "unknown field" state, not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseRecord(Map<String, Value>);

impl CaseRecord {
    /// Build a record from a parsed JSON document
    ///
    /// Only JSON objects are records. Any other document is handed back
    /// unchanged as the error value so the caller can describe it.
    pub fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }

    /// Look up a field, treating JSON `null` the same as an absent key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Look up a field and return it only if it is a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Iterate over all fields in the record
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of top-level fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the record as a JSON value-compatible map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for CaseRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
