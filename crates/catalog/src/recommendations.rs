//! Recommendation list loading.
//!
//! A recommendation source is a JSON object whose keys only give the
//! display order: `{"1": "stir fry", "2": "homemade pizza"}`. Keys are
//! sorted as strings and the values returned in that order.

use crate::error::{json_kind, read_source, CatalogError, Result};
use serde_json::Value;
use std::path::Path;
use tracing::warn;

/// Load an ordered recommendation list from a JSON file.
pub fn load_recommendations(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = read_source(path.as_ref())?;
    parse_recommendations(&content)
}

/// Parse an ordered recommendation list from JSON text.
///
/// Entries whose value is not a string are skipped with a warning.
pub fn parse_recommendations(json: &str) -> Result<Vec<String>> {
    let root: Value = serde_json::from_str(json)?;
    let entries = match root {
        Value::Object(entries) => entries,
        other => return Err(CatalogError::NotAnObject(json_kind(&other))),
    };

    let mut ordered: Vec<(String, String)> = entries
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(label) => Some((key, label)),
            other => {
                warn!(key = %key, found = json_kind(&other), "Skipping non-string recommendation");
                None
            }
        })
        .collect();

    ordered.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(ordered.into_iter().map(|(_, label)| label).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_follow_key_order() {
        let list = parse_recommendations(
            r#"{"3": "stir fry", "1": "homemade pizza", "2": "chicken casserole"}"#,
        )
        .unwrap();
        assert_eq!(list, ["homemade pizza", "chicken casserole", "stir fry"]);
    }

    #[test]
    fn test_keys_sort_as_strings() {
        let list = parse_recommendations(r#"{"10": "ten", "2": "two", "1": "one"}"#).unwrap();
        assert_eq!(list, ["one", "ten", "two"]);
    }

    #[test]
    fn test_non_string_values_skipped() {
        let list = parse_recommendations(r#"{"a": "salad", "b": 7, "c": null, "d": "soup"}"#).unwrap();
        assert_eq!(list, ["salad", "soup"]);
    }

    #[test]
    fn test_rejects_array_root() {
        let err = parse_recommendations(r#"["salad"]"#).unwrap_err();
        assert!(matches!(err, CatalogError::NotAnObject(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recommendation_user.json");
        std::fs::write(&path, r#"{"b": "pasta", "a": "pizza"}"#).unwrap();

        assert_eq!(load_recommendations(&path).unwrap(), ["pizza", "pasta"]);
    }
}
