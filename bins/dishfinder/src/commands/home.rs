//! Home command - featured dishes and recommendation rows

use crate::context::Context;
use anyhow::Result;
use dishfinder_catalog::HomeFeed;
use dishfinder_cli::output::Status;
use dishfinder_core::Error;
use owo_colors::OwoColorize;

/// Run home command
pub fn run(ctx: &Context) -> Result<()> {
    let sources = ctx.feed_sources();
    let feed = HomeFeed::load(ctx.schema.home.featured.clone(), &sources, ctx.schema.home.row_size)
        .map_err(|e| {
            Error::invalid_catalog(e.to_string())
                .with_context("While loading recommendation lists")
                .with_source(e)
        })?;

    if ctx.is_json() {
        println!("{}", serde_json::to_string_pretty(&feed)?);
        return Ok(());
    }

    Status::header("Hello!");
    for (i, dish) in feed.featured.iter().enumerate() {
        let tile = format!("[{}]", dish);
        if i % 2 == 0 {
            print!("  {:<36}", tile);
        } else {
            println!("  {}", tile);
        }
    }
    if feed.featured.len() % 2 == 1 {
        println!();
    }

    for (title, row) in feed.rows() {
        Status::header(title);
        if row.is_empty() {
            println!("  {}", "nothing here yet".dimmed());
            continue;
        }
        let tiles: Vec<String> = row.iter().map(|dish| format!("[{}]", dish)).collect();
        println!("  {}", tiles.join(" "));
    }

    Ok(())
}
