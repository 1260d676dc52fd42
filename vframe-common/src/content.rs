//! Editable content values keyed by field name

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Current value of every editable field, keyed by field name.
///
/// A missing key reads as an empty string. Keys that no schema mentions are
/// kept as-is so callers can carry extra data through an edit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentParams(BTreeMap<String, String>);

impl ContentParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `name`, or `""` when unset.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Copy of `self` with `name` overwritten. Every other key is untouched.
    pub fn with_value(&self, name: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.insert(name, value);
        next
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContentParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContentParams {
        [("title", "T"), ("date", "2025-01-15"), ("tags", "a,b")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_missing_key_reads_empty() {
        let content = sample();
        assert_eq!(content.get("extra"), "");
        assert!(!content.contains_key("extra"));
    }

    #[test]
    fn test_with_value_overwrites_only_target() {
        let before = sample();
        let after = before.with_value("title", "New");

        assert_eq!(after.get("title"), "New");
        for (key, value) in before.iter().filter(|(k, _)| *k != "title") {
            assert_eq!(after.get(key), value);
        }
        assert_eq!(after.len(), before.len());
        // Source is untouched
        assert_eq!(before.get("title"), "T");
    }

    #[test]
    fn test_with_value_adds_new_key() {
        let after = sample().with_value("extra", "E");
        assert_eq!(after.get("extra"), "E");
        assert_eq!(after.len(), 4);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"date":"2025-01-15","tags":"a,b","title":"T"}"#);

        let back: ContentParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
