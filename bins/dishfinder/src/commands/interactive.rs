//! Interactive command - search as you type
//!
//! On a terminal every keystroke edits the query and re-ranks the whole
//! catalog. When stdin is not a terminal each input line is treated as a
//! complete query, which keeps the command scriptable.

use super::search::print_results;
use crate::context::Context;
use anyhow::Result;
use console::{Key, Term};
use dishfinder_catalog::{CatalogLoad, Dish};
use dishfinder_cli::output::format_score;
use dishfinder_search::{RankOptions, ScoredRecord};
use dishfinder_telemetry::{metrics, Timer};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{BufRead, IsTerminal};

/// JSON output for one query in line mode
#[derive(Debug, Serialize)]
struct JsonQueryOutput<'a> {
    query: &'a str,
    results: Vec<&'a str>,
}

/// Run interactive command
pub fn run(ctx: &Context, limit: usize) -> Result<()> {
    let options = ctx.rank_options(Some(limit), None)?;
    let catalog = ctx.load_catalog_for_search()?;

    let term = Term::stdout();
    if term.is_term() && std::io::stdin().is_terminal() && !ctx.is_json() {
        run_terminal(&term, &catalog, &options)
    } else {
        run_lines(ctx, &catalog, &options)
    }
}

fn run_terminal(term: &Term, catalog: &CatalogLoad, options: &RankOptions) -> Result<()> {
    let mut query = String::new();
    let mut drawn = draw(term, catalog, options, &query, 0)?;

    loop {
        match term.read_key()? {
            Key::Char(c) if !c.is_control() => query.push(c),
            Key::Backspace => {
                query.pop();
            }
            Key::Enter | Key::Escape => break,
            _ => continue,
        }
        drawn = draw(term, catalog, options, &query, drawn)?;
    }

    Ok(())
}

/// Redraw the prompt and results, returning the number of lines written.
fn draw(
    term: &Term,
    catalog: &CatalogLoad,
    options: &RankOptions,
    query: &str,
    previous: usize,
) -> Result<usize> {
    if previous > 0 {
        term.clear_last_lines(previous)?;
    }

    let results = refresh(catalog, query, options);
    let width = usize::from(term.size().1);

    term.write_line(&fit_line(
        &format!("{} {}", "search>".cyan().bold(), query),
        width,
    ))?;
    for (i, result) in results.iter().enumerate() {
        let line = format!(
            "{:>3}. {}  {}",
            i + 1,
            result.record.name,
            format_score(result.score).dimmed()
        );
        term.write_line(&fit_line(&line, width))?;
    }

    Ok(results.len() + 1)
}

/// Cut a line to the terminal width so it never wraps; `clear_last_lines`
/// counts rows, not logical lines.
fn fit_line(line: &str, width: usize) -> String {
    console::truncate_str(line, width, "\u{2026}").into_owned()
}

fn run_lines(ctx: &Context, catalog: &CatalogLoad, options: &RankOptions) -> Result<()> {
    let stdin = std::io::stdin();

    for line in stdin.lock().lines() {
        let query = line?;
        let results = refresh(catalog, &query, options);

        if ctx.is_json() {
            let output = JsonQueryOutput {
                query: &query,
                results: results.iter().map(|r| r.record.name.as_str()).collect(),
            };
            println!("{}", serde_json::to_string(&output)?);
        } else {
            println!("{} {}", ">".cyan().bold(), query);
            print_results(&results, true);
        }
    }

    Ok(())
}

/// One re-query: rank the full catalog and record timing.
fn refresh<'a>(
    catalog: &'a CatalogLoad,
    query: &str,
    options: &RankOptions,
) -> Vec<ScoredRecord<'a, Dish>> {
    let _timer = Timer::start("search.rank_ms");
    metrics().increment("search.queries");
    catalog.search(query, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::measure_text_width;

    #[test]
    fn test_fit_line_keeps_short_lines() {
        assert_eq!(fit_line("  1. pizza  100%", 80), "  1. pizza  100%");
    }

    #[test]
    fn test_fit_line_truncates_to_width() {
        let line = format!("  1. {}  67%", "extra cheesy ".repeat(10));
        let fitted = fit_line(&line, 20);

        assert_eq!(measure_text_width(&fitted), 20);
        assert!(fitted.starts_with("  1. extra cheesy"));
        assert!(fitted.ends_with('\u{2026}'));
    }

    #[test]
    fn test_fit_line_ignores_color_codes() {
        let line = format!("{} stir fry", "search>".cyan().bold());
        assert_eq!(fit_line(&line, 80), line);
    }
}
