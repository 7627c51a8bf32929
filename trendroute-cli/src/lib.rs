//! Command-line interface for the TrendRoute engine.
//!
//! Every command prints pretty JSON on standard output. Commands that read
//! the catalog accept `--catalog <path>`; without it the embedded catalog is
//! used.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;
use trendroute_core::{ActivitySink, LoggingSink};

mod activity;
mod error;
mod lookup;
mod source;
mod suggest;

pub use error::CliError;

use activity::{FeedbackArgs, SelectArgs};
use lookup::{IntentArgs, RouteArgs, ShowCatalogArgs, TrendsArgs};
use suggest::SuggestArgs;

const ARG_CATALOG: &str = "catalog";
const ARG_TREND_COUNT: &str = "trend-count";
const ARG_SUGGEST_REQUEST: &str = "request";
const ARG_ROUTE_ID: &str = "route-id";
const ENV_SUGGEST_REQUEST: &str = "TRENDROUTE_CMDS_SUGGEST_REQUEST_PATH";
const ENV_ROUTE_ID: &str = "TRENDROUTE_CMDS_ROUTE_ROUTE_ID";

/// Run the TrendRoute CLI with the current process arguments and environment.
///
/// # Errors
/// Returns the first [`CliError`] raised while parsing arguments, loading
/// inputs, or writing output.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    let sink = LoggingSink::default();
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &sink, &mut stdout)
}

fn run_command(
    command: Command,
    sink: &dyn ActivitySink,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Suggest(args) => suggest::run_suggest_with(args, writer),
        Command::Route(args) => lookup::run_route_with(args, writer),
        Command::Trends(args) => lookup::run_trends_with(args, writer),
        Command::Catalog(args) => lookup::run_catalog_with(args, writer),
        Command::Intent(args) => lookup::run_intent_with(&args, writer),
        Command::Select(args) => activity::run_select_with(&args, sink, writer),
        Command::Feedback(args) => activity::run_feedback_with(args, sink, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "trendroute",
    about = "Trend-aware route suggestions from a local catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank catalog routes for a JSON-encoded suggestion request.
    Suggest(SuggestArgs),
    /// Print the step-by-step itinerary for a route.
    Route(RouteArgs),
    /// Print the trend entries the engine would consult.
    Trends(TrendsArgs),
    /// Print the whole catalog snapshot.
    Catalog(ShowCatalogArgs),
    /// Parse free text into a structured trip intent.
    Intent(IntentArgs),
    /// Acknowledge that a route was selected.
    Select(SelectArgs),
    /// Record a rating and optional comment for a route.
    Feedback(FeedbackArgs),
}

/// Serialise `value` as pretty JSON followed by a newline.
fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
