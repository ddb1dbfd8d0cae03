//! Dish catalog loading.
//!
//! The catalog is a JSON object mapping each dish name to its nutrition
//! facts:
//!
//! ```json
//! {
//!   "homemade pizza": { "calories": 285, "fat": 10.4, "protein": 12.2, "sugar": 3.6, "carbs": 35.7 }
//! }
//! ```
//!
//! Entries that are not objects, lack a field, or carry a non-numeric
//! value are skipped with a warning. Only an unreadable file or a
//! top-level value that is not an object fails the whole load.

use crate::dish::{Dish, Nutrition};
use crate::error::{json_kind, read_source, CatalogError, Result};
use dishfinder_search::{rank_with, RankOptions, ScoredRecord};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// A catalog entry that was left out of the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    /// Dish name (the JSON key)
    pub name: String,
    /// Why the entry was rejected
    pub reason: String,
}

/// Outcome of loading a catalog: the dishes that parsed plus the ones
/// that didn't.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogLoad {
    /// Successfully parsed dishes, in key order
    pub dishes: Vec<Dish>,
    /// Entries that were skipped
    pub skipped: Vec<SkippedEntry>,
}

impl CatalogLoad {
    /// True when every entry in the source parsed.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Rank the loaded dishes against a query.
    pub fn search(&self, query: &str, options: &RankOptions) -> Vec<ScoredRecord<'_, Dish>> {
        rank_with(query, &self.dishes, options)
    }
}

/// Load a dish catalog from a JSON file.
pub fn load_dishes(path: impl AsRef<Path>) -> Result<CatalogLoad> {
    let path = path.as_ref();
    let content = read_source(path)?;
    let load = parse_dishes(&content)?;

    debug!(
        path = %path.display(),
        dishes = load.dishes.len(),
        skipped = load.skipped.len(),
        "Catalog loaded"
    );

    Ok(load)
}

/// Parse a dish catalog from JSON text.
pub fn parse_dishes(json: &str) -> Result<CatalogLoad> {
    let root: Value = serde_json::from_str(json)?;
    let entries = match root {
        Value::Object(entries) => entries,
        other => return Err(CatalogError::NotAnObject(json_kind(&other))),
    };

    let mut load = CatalogLoad::default();

    for (name, value) in entries {
        match parse_entry(value) {
            Ok(nutrition) => load.dishes.push(Dish::new(name, nutrition)),
            Err(reason) => {
                warn!(dish = %name, %reason, "Skipping malformed catalog entry");
                load.skipped.push(SkippedEntry { name, reason });
            }
        }
    }

    Ok(load)
}

fn parse_entry(value: Value) -> std::result::Result<Nutrition, String> {
    if !value.is_object() {
        return Err(format!("expected an object, found {}", json_kind(&value)));
    }
    serde_json::from_value(value).map_err(|e| e.to_string())
}
