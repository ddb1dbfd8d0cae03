//! Check command - validate catalog and recommendation files

use crate::context::{catalog_error, Context};
use anyhow::Result;
use dishfinder_catalog::{load_dishes, load_recommendations, SkippedEntry};
use dishfinder_cli::output::{format_count, Status};
use dishfinder_core::Error;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

/// JSON output for check
#[derive(Debug, Serialize)]
struct JsonCheckOutput {
    catalog: String,
    dishes: usize,
    skipped: Vec<SkippedEntry>,
    recommendations: Vec<RecommendationCheck>,
}

#[derive(Debug, Clone, Serialize)]
struct RecommendationCheck {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    entries: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run check command
///
/// Fails when the catalog cannot be loaded, when any catalog entry was
/// skipped, or when a recommendation file is unreadable.
pub fn run(ctx: &Context) -> Result<()> {
    let path = ctx.catalog_path();
    let load = load_dishes(&path).map_err(|e| catalog_error(e, &path))?;

    let sources = ctx.feed_sources();
    let recommendations: Vec<RecommendationCheck> = [&sources.user, &sources.popular]
        .into_iter()
        .map(|p| check_recommendations(p))
        .collect();

    if ctx.is_json() {
        let output = JsonCheckOutput {
            catalog: path.display().to_string(),
            dishes: load.dishes.len(),
            skipped: load.skipped.clone(),
            recommendations: recommendations.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        Status::header("Catalog");
        Status::success(&format!(
            "{}: {} loaded",
            path.display(),
            format_count(load.dishes.len(), "dish", "dishes")
        ));
        for entry in &load.skipped {
            Status::error(&format!("{} {}", entry.name.bold(), entry.reason.dimmed()));
        }

        Status::header("Recommendations");
        for check in &recommendations {
            match (&check.entries, &check.error) {
                (Some(n), _) => Status::success(&format!(
                    "{}: {}",
                    check.path,
                    format_count(*n, "entry", "entries")
                )),
                (None, Some(error)) => Status::error(&format!("{}: {}", check.path, error)),
                (None, None) => {}
            }
        }
    }

    if !load.is_complete() {
        return Err(Error::incomplete_catalog(load.skipped.len())
            .with_context(path.display().to_string())
            .into());
    }
    if let Some(failed) = recommendations.iter().find(|c| c.error.is_some()) {
        return Err(Error::invalid_catalog(failed.error.clone().unwrap_or_default())
            .with_context(failed.path.clone())
            .into());
    }

    Ok(())
}

fn check_recommendations(path: &Path) -> RecommendationCheck {
    let display = path.display().to_string();
    match load_recommendations(path) {
        Ok(list) => RecommendationCheck {
            path: display,
            entries: Some(list.len()),
            error: None,
        },
        Err(e) => RecommendationCheck {
            path: display,
            entries: None,
            error: Some(e.to_string()),
        },
    }
}
