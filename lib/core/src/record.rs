//! Original source records
//!
//! Full-fidelity rows of the source catalogue. Every field is text and
//! may be missing; the aggregated candidate columns only cover rows where
//! all schema features are present, so the two collections differ in
//! length and order.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Loosely-typed source row: field name to optional text value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Option<String>>", into = "BTreeMap<String, Option<String>>")]
pub struct OriginalRecord {
    fields: AHashMap<String, Option<String>>,
}

impl OriginalRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a row that uses the empty string as its missing marker
    pub fn from_loose<I, K, V>(row: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        row.into_iter()
            .map(|(k, v)| (k.into(), normalize_missing(Some(v.into()))))
            .collect::<AHashMap<String, Option<String>>>()
            .into()
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .insert(name.into(), normalize_missing(Some(value.into())));
        self
    }

    #[must_use]
    pub fn with_missing(mut self, name: impl Into<String>) -> Self {
        self.fields.insert(name.into(), None);
        self
    }

    /// Raw text of a present field; `None` when absent or missing
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|v| v.as_deref())
    }

    /// Field parsed as a float; `None` when missing or not numeric
    pub fn numeric(&self, name: &str) -> Option<f64> {
        self.raw(name).and_then(|s| s.trim().parse::<f64>().ok())
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.raw(name).is_some()
    }

    /// Human-readable name stored under the identifier field
    pub fn display_name(&self, identifier: &str) -> Option<&str> {
        self.raw(identifier)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields sorted by name, for stable output
    pub fn sorted_fields(&self) -> BTreeMap<String, Option<String>> {
        self.fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

fn normalize_missing(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl From<AHashMap<String, Option<String>>> for OriginalRecord {
    fn from(fields: AHashMap<String, Option<String>>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k, normalize_missing(v)))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, Option<String>>> for OriginalRecord {
    fn from(fields: BTreeMap<String, Option<String>>) -> Self {
        fields.into_iter().collect::<AHashMap<_, _>>().into()
    }
}

impl From<OriginalRecord> for BTreeMap<String, Option<String>> {
    fn from(record: OriginalRecord) -> Self {
        record.fields.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_missing() {
        let record = OriginalRecord::from_loose([("a", ""), ("b", "4"), ("pl_name", "Y")]);
        assert!(!record.is_present("a"));
        assert_eq!(record.numeric("b"), Some(4.0));
        assert_eq!(record.display_name("pl_name"), Some("Y"));
    }

    #[test]
    fn test_missing_is_not_zero() {
        let record = OriginalRecord::new().with_field("a", "0").with_missing("b");
        assert_eq!(record.numeric("a"), Some(0.0));
        assert_eq!(record.numeric("b"), None);
        assert_eq!(record.numeric("absent"), None);
    }

    #[test]
    fn test_non_numeric_text() {
        let record = OriginalRecord::new().with_field("a", "n/a");
        assert_eq!(record.raw("a"), Some("n/a"));
        assert_eq!(record.numeric("a"), None);
    }

    #[test]
    fn test_deserialize_nulls_and_blanks() {
        let record: OriginalRecord =
            serde_json::from_str(r#"{"a": "3", "b": null, "c": "  ", "pl_name": "X"}"#).unwrap();
        assert_eq!(record.numeric("a"), Some(3.0));
        assert!(!record.is_present("b"));
        assert!(!record.is_present("c"));
        assert_eq!(record.len(), 4);
    }
}
