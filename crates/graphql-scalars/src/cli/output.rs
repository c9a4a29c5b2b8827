//! Output formatting utilities

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use graphql_scalars_diagnostics::GraphQLError;
use serde_json::Value;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use super::command::{CommandConfig, Outcome};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON, one document per line
    Json,
    /// Indented JSON for values, colored text for errors
    #[default]
    Pretty,
}

/// Color output options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Set up color output based on user preference
pub fn setup_colors(mode: ColorMode) {
    let enabled = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    };
    colored::control::set_override(enabled);
}

/// Route `log` records to stderr, at the level the run asks for
pub fn init_logging(config: &CommandConfig) {
    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(config.verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `--verbose` forces debug output; otherwise `RUST_LOG` applies, falling
/// back to warnings only.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    format!("{} {:#}", "Error:".red().bold(), error)
}

/// Format JSON value for output
pub fn format_json(value: &Value, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).context("Failed to serialize JSON")
    } else {
        serde_json::to_string(value).context("Failed to serialize JSON")
    }
}

/// Format a rejected coercion
pub fn format_rejection(error: &GraphQLError, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string(error).context("Failed to serialize error")
        }
        OutputFormat::Pretty => Ok(error.colored()),
    }
}

/// Format the scalar listing as aligned `name  description` lines
fn format_listing(items: &[Value]) -> String {
    let width = items
        .iter()
        .filter_map(|item| item["name"].as_str())
        .map(str::len)
        .max()
        .unwrap_or(0);

    items
        .iter()
        .map(|item| {
            let name = item["name"].as_str().unwrap_or_default();
            let description = item["description"].as_str().unwrap_or("");
            let padded = format!("{:width$}", name, width = width);
            format!("{}  {}", padded.as_str().bold(), description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print an outcome in the specified format.
///
/// Values go to stdout. Pretty-printed rejections go to stderr.
pub fn print_outcome(outcome: &Outcome, format: OutputFormat, listing: bool) -> Result<()> {
    match (outcome, format) {
        (Outcome::Success(Value::Array(items)), OutputFormat::Pretty) if listing => {
            println!("{}", format_listing(items));
        }
        (Outcome::Success(value), _) => {
            println!("{}", format_json(value, format == OutputFormat::Pretty)?);
        }
        (Outcome::Rejected(error), OutputFormat::Json) => {
            println!("{}", format_rejection(error, format)?);
        }
        (Outcome::Rejected(error), OutputFormat::Pretty) => {
            eprintln!("{}", format_rejection(error, format)?);
        }
    }
    Ok(())
}
