//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use dishfinder_core::Error;
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }

    /// Print a coded error with its context and suggestion
    pub fn report(error: &Error) {
        eprintln!(
            "{} {} {}",
            "✗".red(),
            format!("[{}]", error.code).dimmed(),
            error.message
        );
        if let Some(ctx) = &error.context {
            eprintln!("  {} {}", "context:".dimmed(), ctx);
        }
        if let Some(suggestion) = &error.suggestion {
            eprintln!("  {} {}", "hint:".cyan(), suggestion);
        }
    }
}

/// Format a similarity score as a percentage
pub fn format_score(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

/// Format an energy value
pub fn format_calories(calories: f64) -> String {
    format!("{:.0} kcal", calories)
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
