//! Read-only catalog commands: `route`, `trends`, `catalog` and `intent`.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Args, Parser};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use trendroute_core::{
    EngineConfig, IntentParser, KeywordIntentParser, RouteDetailStore, select_top_trending,
};

use crate::source::load_snapshot;
use crate::{ARG_CATALOG, ARG_ROUTE_ID, ARG_TREND_COUNT, CliError, ENV_ROUTE_ID, write_json};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Show the itinerary for a route")]
#[ortho_config(prefix = "TRENDROUTE")]
pub(crate) struct RouteArgs {
    /// Identifier of the route to show.
    #[arg(value_name = ARG_ROUTE_ID)]
    #[serde(default)]
    pub(crate) route_id: Option<String>,
    /// Catalog JSON file to use instead of the embedded catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

/// CLI arguments for the `trends` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Show the most popular trending cities")]
#[ortho_config(prefix = "TRENDROUTE")]
pub(crate) struct TrendsArgs {
    /// Catalog JSON file to use instead of the embedded catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Number of trending cities to show.
    #[arg(long = ARG_TREND_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) trend_count: Option<usize>,
}

/// CLI arguments for the `catalog` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Dump the catalog snapshot")]
#[ortho_config(prefix = "TRENDROUTE")]
pub(crate) struct ShowCatalogArgs {
    /// Catalog JSON file to use instead of the embedded catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

/// CLI arguments for the `intent` subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct IntentArgs {
    /// Free text describing the trip.
    #[arg(value_name = "text", required = true, num_args = 1..)]
    pub(crate) text: Vec<String>,
    /// Catalog whose trending cities are recognised as destinations.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

pub(crate) fn run_route_with(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let route_id = merged.route_id.ok_or(CliError::MissingArgument {
        field: ARG_ROUTE_ID,
        env: ENV_ROUTE_ID,
    })?;
    let snapshot = load_snapshot(merged.catalog.as_deref())?;
    let detail = snapshot
        .route_detail(&route_id)
        .ok_or(CliError::RouteNotFound { route_id })?;
    write_json(writer, &detail)
}

pub(crate) fn run_trends_with(args: TrendsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let snapshot = load_snapshot(merged.catalog.as_deref())?;
    let count = merged
        .trend_count
        .unwrap_or(EngineConfig::DEFAULT_TREND_COUNT);
    write_json(
        writer,
        &select_top_trending(&snapshot.trending_locations, count),
    )
}

pub(crate) fn run_catalog_with(
    args: ShowCatalogArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let snapshot = load_snapshot(merged.catalog.as_deref())?;
    write_json(writer, &snapshot)
}

pub(crate) fn run_intent_with(args: &IntentArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let parser = match &args.catalog {
        Some(path) => {
            let snapshot = load_snapshot(Some(path))?;
            KeywordIntentParser::with_cities(
                snapshot
                    .trending_locations
                    .into_iter()
                    .map(|trend| trend.city),
            )
        }
        None => KeywordIntentParser::default(),
    };
    let parsed = parser.parse(&args.text.join(" "));
    write_json(writer, &parsed)
}
