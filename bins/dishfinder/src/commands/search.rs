//! Search command - rank the catalog against a query

use crate::context::Context;
use anyhow::Result;
use dishfinder_catalog::Dish;
use dishfinder_cli::output::{format_calories, format_count, format_score, Status};
use dishfinder_search::ScoredRecord;
use dishfinder_telemetry::{metrics, timed_span};
use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output for one result
#[derive(Debug, Serialize)]
struct SearchHit<'a> {
    #[serde(flatten)]
    dish: &'a Dish,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
}

/// Run search command
pub fn run(
    ctx: &Context,
    query: &str,
    limit: Option<usize>,
    min_score: Option<f64>,
    show_scores: bool,
) -> Result<()> {
    let options = ctx.rank_options(limit, min_score)?;
    let catalog = ctx.load_catalog_for_search()?;

    let results = {
        timed_span!("search.rank_ms", query = %query);
        catalog.search(query, &options)
    };
    metrics().increment("search.queries");

    if ctx.is_json() {
        let hits: Vec<SearchHit<'_>> = results
            .iter()
            .map(|r| SearchHit {
                dish: r.record,
                score: show_scores.then_some(r.score),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if results.is_empty() {
        Status::info(&format!("No dishes match \"{}\"", query.trim()));
        return Ok(());
    }

    Status::header(&format!(
        "Results for \"{}\" ({} of {})",
        query.trim(),
        results.len(),
        format_count(catalog.dishes.len(), "dish", "dishes")
    ));
    print_results(&results, show_scores);

    Ok(())
}

/// Print ranked dishes as a numbered list
pub fn print_results(results: &[ScoredRecord<'_, Dish>], show_scores: bool) {
    let width = results
        .iter()
        .map(|r| r.record.name.chars().count())
        .max()
        .unwrap_or(0);

    for (i, result) in results.iter().enumerate() {
        let dish = result.record;
        let position = format!("{:>3}.", i + 1);
        let calories = format_calories(dish.nutrition.calories);
        if show_scores {
            println!(
                "{} {:<width$}  {:>10}  {}",
                position.dimmed(),
                dish.name,
                calories,
                format_score(result.score).cyan(),
                width = width
            );
        } else {
            println!(
                "{} {:<width$}  {:>10}",
                position.dimmed(),
                dish.name,
                calories,
                width = width
            );
        }
    }
}
