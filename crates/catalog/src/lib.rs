//! Dish catalog and home feed data for Dishfinder.
//!
//! This crate provides:
//! - Dish records with nutrition facts
//! - Fault-tolerant catalog loading (malformed entries are skipped and reported)
//! - Ordered recommendation lists
//! - Home feed assembly
//!
//! # Example
//!
//! ```
//! use dishfinder_catalog::parse_dishes;
//! use dishfinder_search::RankOptions;
//!
//! let load = parse_dishes(r#"{
//!     "stir fry": {"calories": 320, "fat": 12, "protein": 21, "sugar": 8, "carbs": 30},
//!     "homemade pizza": {"calories": 285, "fat": 10, "protein": 12, "sugar": 4, "carbs": 36},
//!     "mystery stew": {"calories": 300}
//! }"#).unwrap();
//!
//! assert_eq!(load.dishes.len(), 2);
//! assert_eq!(load.skipped[0].name, "mystery stew");
//!
//! let results = load.search("stir-fry", &RankOptions::default());
//! assert_eq!(results[0].record.name, "stir fry");
//! ```

mod dish;
mod error;
pub mod feed;
mod loader;
mod recommendations;

pub use dish::{Dish, Nutrition};
pub use error::{CatalogError, CatalogErrorCode, Result};
pub use feed::{FeedSources, HomeFeed};
pub use loader::{load_dishes, parse_dishes, CatalogLoad, SkippedEntry};
pub use recommendations::{load_recommendations, parse_recommendations};
