//! Configuration schema definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub home: HomeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        if self.home.row_size == 0 {
            return Err(Error::invalid_config_value("home.row_size", "must be at least 1"));
        }
        Ok(())
    }
}

/// Data file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Dish catalog (name -> nutrition facts)
    #[serde(default = "default_dishes")]
    pub dishes: String,

    /// "Recommended for you" list
    #[serde(default = "default_recommendations_user")]
    pub recommendations_user: String,

    /// "Popular foods" list
    #[serde(default = "default_recommendations_popular")]
    pub recommendations_popular: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dishes: default_dishes(),
            recommendations_user: default_recommendations_user(),
            recommendations_popular: default_recommendations_popular(),
        }
    }
}

fn default_dishes() -> String {
    "data/dishes.json".to_string()
}

fn default_recommendations_user() -> String {
    "data/recommendation_user.json".to_string()
}

fn default_recommendations_popular() -> String {
    "data/recommendation_popular.json".to_string()
}

/// Search result filtering
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchConfig {
    /// Maximum results to show (all when unset)
    #[serde(default)]
    pub limit: Option<usize>,

    /// Hide results scoring below this
    #[serde(default)]
    pub min_score: f64,
}

impl SearchConfig {
    /// Reject a minimum score outside `0.0..=1.0` (NaN included) and a
    /// zero limit.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(Error::invalid_config_value(
                "search.min_score",
                format!("{} is outside 0.0..=1.0", self.min_score),
            ));
        }
        if self.limit == Some(0) {
            return Err(Error::invalid_config_value("search.limit", "must be at least 1"));
        }
        Ok(())
    }
}

/// Home screen layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeConfig {
    /// Tiles per recommendation row
    #[serde(default = "default_row_size")]
    pub row_size: usize,

    /// Dishes in the featured grid
    #[serde(default = "default_featured")]
    pub featured: Vec<String>,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            row_size: default_row_size(),
            featured: default_featured(),
        }
    }
}

fn default_row_size() -> usize {
    5
}

fn default_featured() -> Vec<String> {
    vec![
        "bacon egg and cheese sandwich",
        "blueberry muffins",
        "homemade pizza",
        "fettuccine alfredo",
        "chicken casserole",
        "stir fry",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Log output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
