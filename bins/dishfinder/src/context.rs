//! Shared state for commands: configuration, output format and data loading.

use crate::OutputFormat;
use dishfinder_catalog::{load_dishes, CatalogError, CatalogLoad, FeedSources};
use dishfinder_cli::output::{format_count, Status};
use dishfinder_core::config::{ConfigSchema, SearchConfig};
use dishfinder_core::Error;
use dishfinder_search::RankOptions;
use dishfinder_telemetry::metrics;
use std::path::{Path, PathBuf};

/// Everything a command needs besides its own arguments.
pub struct Context {
    pub schema: ConfigSchema,
    pub format: OutputFormat,
    catalog_override: Option<PathBuf>,
}

impl Context {
    pub fn new(schema: ConfigSchema, format: OutputFormat, catalog_override: Option<PathBuf>) -> Self {
        Self {
            schema,
            format,
            catalog_override,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.catalog_override
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.schema.catalog.dishes))
    }

    pub fn feed_sources(&self) -> FeedSources {
        FeedSources {
            user: PathBuf::from(&self.schema.catalog.recommendations_user),
            popular: PathBuf::from(&self.schema.catalog.recommendations_popular),
        }
    }

    /// Configured search filters, with command-line values taking precedence.
    ///
    /// Overrides go through the same range checks as the config file.
    pub fn rank_options(
        &self,
        limit: Option<usize>,
        min_score: Option<f64>,
    ) -> Result<RankOptions, Error> {
        let search = SearchConfig {
            limit: limit.or(self.schema.search.limit),
            min_score: min_score.unwrap_or(self.schema.search.min_score),
        };
        search
            .validate()
            .map_err(|e| e.with_context("While applying command-line search options"))?;

        Ok(RankOptions {
            limit: search.limit,
            min_score: search.min_score,
        })
    }

    /// Load the dish catalog, recording its size in the metrics registry.
    pub fn load_catalog(&self) -> Result<CatalogLoad, Error> {
        let path = self.catalog_path();
        let load = load_dishes(&path).map_err(|e| catalog_error(e, &path))?;

        metrics().gauge("catalog.dishes", load.dishes.len() as u64);
        metrics().gauge("catalog.skipped", load.skipped.len() as u64);

        Ok(load)
    }

    /// Load the catalog and mention skipped entries in text mode.
    pub fn load_catalog_for_search(&self) -> Result<CatalogLoad, Error> {
        let load = self.load_catalog()?;
        if !load.is_complete() && !self.is_json() {
            Status::warning(&format!(
                "{} skipped; run `dishfinder check` for details",
                format_count(load.skipped.len(), "catalog entry", "catalog entries")
            ));
        }
        Ok(load)
    }
}

/// Translate a catalog load failure into a coded error.
pub fn catalog_error(err: CatalogError, path: &Path) -> Error {
    let coded = if err.is_not_found() {
        Error::file_not_found(path)
    } else {
        Error::invalid_catalog(err.to_string())
    };
    coded
        .with_context(format!("While loading {}", path.display()))
        .with_source(err)
}
