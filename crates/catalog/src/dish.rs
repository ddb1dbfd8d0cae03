//! Dish and nutrition records.

use dishfinder_search::Labeled;
use serde::{Deserialize, Serialize};

/// Nutrition facts for one serving.
///
/// Every field is required when loading a catalog; an entry missing any
/// of them is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy in kcal
    pub calories: f64,
    /// Fat in grams
    pub fat: f64,
    /// Protein in grams
    pub protein: f64,
    /// Sugar in grams
    pub sugar: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
}

/// A catalog dish.
///
/// Ranked by `name`; the nutrition facts are payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Display name, matched against search queries
    pub name: String,
    /// Nutrition facts
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

impl Dish {
    /// Creates a new dish.
    pub fn new(name: impl Into<String>, nutrition: Nutrition) -> Self {
        Self {
            name: name.into(),
            nutrition,
        }
    }
}

impl Labeled for Dish {
    fn label(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn muffins() -> Dish {
        Dish::new(
            "blueberry muffins",
            Nutrition { calories: 426.0, fat: 17.0, protein: 6.2, sugar: 34.0, carbs: 61.0 },
        )
    }

    #[test]
    fn test_dish_label_is_name() {
        assert_eq!(muffins().label(), "blueberry muffins");
    }

    #[test]
    fn test_dish_serializes_flat() {
        let json = serde_json::to_value(muffins()).unwrap();
        assert_eq!(json["name"], "blueberry muffins");
        assert_eq!(json["calories"], 426.0);
        assert_eq!(json["carbs"], 61.0);
        assert!(json.get("nutrition").is_none());
    }
}
