//! dishfinder: fuzzy dish search and home feed from the terminal.

use clap::{Parser, Subcommand, ValueEnum};
use dishfinder_cli::output::Status;
use dishfinder_core::config::Config;
use dishfinder_telemetry::TelemetryConfig;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod context;

use commands::{check, home, interactive, search};
use context::Context;

/// Fuzzy dish search and recommendations
#[derive(Parser)]
#[command(name = "dishfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to .dishfinder.toml if present)
    #[arg(short, long, global = true, env = "DISHFINDER_CONFIG")]
    config: Option<String>,

    /// Dish catalog to use instead of the configured one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print collected metrics to stderr on exit
    #[arg(long, global = true)]
    stats: bool,

    #[command(subcommand)]
    command: Commands,
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the catalog against a query
    Search {
        /// Free-text query (case and surrounding whitespace are ignored)
        query: String,

        /// Maximum results to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Hide results scoring below this (0.0 - 1.0)
        #[arg(short, long)]
        min_score: Option<f64>,

        /// Show similarity scores
        #[arg(short, long)]
        scores: bool,
    },

    /// Show the home feed
    Home,

    /// Search as you type; results refresh on every keystroke
    Interactive {
        /// Results shown per refresh
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Validate the catalog and recommendation files
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e, cli.format);
            return exit_code(e.exit_code());
        }
    };

    let telemetry = if cli.verbose {
        TelemetryConfig::verbose()
    } else {
        TelemetryConfig::with_level(config.schema.logging.level.clone())
    };
    if let Err(e) = dishfinder_telemetry::init_with_config(telemetry) {
        Status::warning(&e.to_string());
    }

    tracing::debug!(config = ?config.path, "Configuration loaded");

    let ctx = Context::new(config.schema, cli.format, cli.catalog);

    let result = match cli.command {
        Commands::Search { query, limit, min_score, scores } => {
            search::run(&ctx, &query, limit, min_score, scores)
        }
        Commands::Home => home::run(&ctx),
        Commands::Interactive { limit } => interactive::run(&ctx, limit),
        Commands::Check => check::run(&ctx),
    };

    if cli.stats {
        let metrics = dishfinder_telemetry::metrics().export_json();
        match serde_json::to_string_pretty(&metrics) {
            Ok(json) => eprintln!("{}", json),
            Err(e) => Status::warning(&format!("Could not export metrics: {}", e)),
        }
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<dishfinder_core::Error>() {
            Some(coded) => {
                report_error(coded, ctx.format);
                exit_code(coded.exit_code())
            }
            None => {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Print a coded error to stderr, as a JSON report under `--format json`.
fn report_error(error: &dishfinder_core::Error, format: OutputFormat) {
    if format == OutputFormat::Json {
        if let Ok(json) = serde_json::to_string_pretty(&error.to_report()) {
            eprintln!("{}", json);
            return;
        }
    }
    Status::report(error);
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
