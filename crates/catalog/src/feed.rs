//! Home feed assembly.
//!
//! The home screen shows a grid of featured dishes and two horizontal
//! rows of recommendations. Each row shows a fixed number of tiles.

use crate::error::Result;
use crate::recommendations::load_recommendations;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Tiles per recommendation row.
pub const DEFAULT_ROW_SIZE: usize = 5;

/// Dishes shown in the featured grid when nothing else is configured.
pub const DEFAULT_FEATURED: &[&str] = &[
    "bacon egg and cheese sandwich",
    "blueberry muffins",
    "homemade pizza",
    "fettuccine alfredo",
    "chicken casserole",
    "stir fry",
];

/// Where the two recommendation rows come from.
#[derive(Debug, Clone)]
pub struct FeedSources {
    /// Personal recommendations ("Recommended for you")
    pub user: PathBuf,
    /// Popular dishes ("Popular foods")
    pub popular: PathBuf,
}

/// Content of the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeFeed {
    /// Featured grid
    pub featured: Vec<String>,
    /// "Recommended for you" row
    pub recommended: Vec<String>,
    /// "Popular foods" row
    pub popular: Vec<String>,
}

impl HomeFeed {
    /// Build a feed, truncating each recommendation row to `row_size`.
    ///
    /// Rows shorter than `row_size` are kept as they are.
    pub fn assemble(
        featured: Vec<String>,
        mut recommended: Vec<String>,
        mut popular: Vec<String>,
        row_size: usize,
    ) -> Self {
        recommended.truncate(row_size);
        popular.truncate(row_size);
        Self {
            featured,
            recommended,
            popular,
        }
    }

    /// Load both recommendation rows and assemble the feed.
    ///
    /// A missing recommendation file produces an empty row; any other
    /// load failure is returned.
    pub fn load(featured: Vec<String>, sources: &FeedSources, row_size: usize) -> Result<Self> {
        let recommended = load_row(&sources.user)?;
        let popular = load_row(&sources.popular)?;
        Ok(Self::assemble(featured, recommended, popular, row_size))
    }

    /// Titled recommendation rows, in display order.
    pub fn rows(&self) -> [(&'static str, &[String]); 2] {
        [
            ("Recommended for you", self.recommended.as_slice()),
            ("Popular foods", self.popular.as_slice()),
        ]
    }
}

fn load_row(path: &Path) -> Result<Vec<String>> {
    match load_recommendations(path) {
        Ok(row) => Ok(row),
        Err(e) if e.is_not_found() => {
            warn!(path = %path.display(), "Recommendation source not found, row left empty");
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_assemble_truncates_rows() {
        let long = strings(&["a", "b", "c", "d", "e", "f", "g"]);
        let feed = HomeFeed::assemble(Vec::new(), long.clone(), long, DEFAULT_ROW_SIZE);
        assert_eq!(feed.recommended, ["a", "b", "c", "d", "e"]);
        assert_eq!(feed.popular.len(), DEFAULT_ROW_SIZE);
    }

    #[test]
    fn test_assemble_keeps_short_rows() {
        let feed = HomeFeed::assemble(strings(&["stir fry"]), strings(&["x", "y"]), Vec::new(), 5);
        assert_eq!(feed.featured, ["stir fry"]);
        assert_eq!(feed.recommended, ["x", "y"]);
        assert!(feed.popular.is_empty());
    }

    #[test]
    fn test_rows_titles() {
        let feed = HomeFeed::assemble(Vec::new(), strings(&["x"]), strings(&["y"]), 5);
        let rows = feed.rows();
        assert_eq!(rows[0].0, "Recommended for you");
        assert_eq!(rows[0].1, ["x"]);
        assert_eq!(rows[1].0, "Popular foods");
    }

    #[test]
    fn test_load_orders_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("recommendation_user.json");
        std::fs::write(&user, r#"{"2": "pasta", "1": "pizza", "3": "soup"}"#).unwrap();

        let sources = FeedSources {
            user,
            popular: dir.path().join("missing.json"),
        };
        let feed = HomeFeed::load(strings(DEFAULT_FEATURED), &sources, 2).unwrap();

        assert_eq!(feed.featured.len(), 6);
        assert_eq!(feed.recommended, ["pizza", "pasta"]);
        assert!(feed.popular.is_empty());
    }

    #[test]
    fn test_load_propagates_malformed_source() {
        let dir = tempfile::tempdir().unwrap();
        let user = dir.path().join("recommendation_user.json");
        std::fs::write(&user, "[]").unwrap();

        let sources = FeedSources {
            user: user.clone(),
            popular: user,
        };
        assert!(HomeFeed::load(Vec::new(), &sources, 5).is_err());
    }
}
