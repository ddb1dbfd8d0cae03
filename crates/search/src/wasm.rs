//! WASM bindings for dish ranking.

use crate::Record;
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;

/// Normalized similarity between a query and a label (0.0 - 1.0).
#[wasm_bindgen]
pub fn similarity(query: &str, label: &str) -> f64 {
    crate::similarity_score(query, label)
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Rank items and return them re-ordered as JSON.
///
/// # Arguments
/// * `query` - Search query
/// * `items_json` - JSON array of objects with a `label` field; any other
///   fields are passed through
/// * `max_results` - Maximum results to return (0 for all)
///
/// # Returns
/// JSON array of the same objects, best match first. Malformed input
/// yields `[]`.
#[wasm_bindgen]
pub fn rank_json(query: &str, items_json: &str, max_results: usize) -> String {
    let items: Vec<Record<Map<String, Value>>> = match serde_json::from_str(items_json) {
        Ok(items) => items,
        Err(_) => return "[]".to_string(),
    };

    let mut ranked = crate::rank(query, items);

    if max_results > 0 {
        ranked.truncate(max_results);
    }

    serde_json::to_string(&ranked).unwrap_or_else(|_| "[]".to_string())
}
