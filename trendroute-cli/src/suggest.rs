//! Suggest command implementation for the TrendRoute CLI.

use std::io::{BufReader, Write};
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use trendroute_core::{
    CatalogHandle, EngineConfig, Recommender, SuggestRequest, SuggestResponse, SuggestionEngine,
};
use trendroute_fs::open_utf8_file;
use trendroute_scorer::HeuristicScorer;

use crate::source::{load_snapshot, require_existing};
use crate::{
    ARG_CATALOG, ARG_SUGGEST_REQUEST, ARG_TREND_COUNT, CliError, ENV_SUGGEST_REQUEST, write_json,
};

/// CLI arguments for the `suggest` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank catalog routes for a JSON-encoded SuggestRequest. \
                 Routes are scored against the caller's budget and \
                 interests and boosted when their city is trending.",
    about = "Suggest routes for a request"
)]
#[ortho_config(prefix = "TRENDROUTE")]
pub(crate) struct SuggestArgs {
    /// Path to a JSON file containing a SuggestRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Catalog JSON file to use instead of the embedded catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Number of trending cities consulted while scoring.
    #[arg(long = ARG_TREND_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) trend_count: Option<usize>,
}

impl SuggestArgs {
    pub(crate) fn into_config(self) -> Result<SuggestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SuggestConfig::try_from(merged)
    }
}

/// Resolved `suggest` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SuggestConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Optional catalog override.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Trend entries consulted per request.
    pub(crate) trend_count: usize,
}

impl SuggestConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_SUGGEST_REQUEST)?;
        if let Some(catalog) = &self.catalog {
            require_existing(catalog, ARG_CATALOG)?;
        }
        Ok(())
    }

    const fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            trend_count: self.trend_count,
        }
    }
}

impl TryFrom<SuggestArgs> for SuggestConfig {
    type Error = CliError;

    fn try_from(args: SuggestArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SUGGEST_REQUEST,
            env: ENV_SUGGEST_REQUEST,
        })?;
        Ok(Self {
            request_path,
            catalog: args.catalog,
            trend_count: args
                .trend_count
                .unwrap_or(EngineConfig::DEFAULT_TREND_COUNT),
        })
    }
}

pub(crate) fn run_suggest_with(args: SuggestArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let response = execute_suggest(args)?;
    write_json(writer, &response)
}

fn execute_suggest(args: SuggestArgs) -> Result<SuggestResponse, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let request = load_suggest_request(&config.request_path)?;
    let snapshot = load_snapshot(config.catalog.as_deref())?;
    let engine = SuggestionEngine::new(
        HeuristicScorer::default(),
        Arc::new(CatalogHandle::new(snapshot)),
    )
    .with_config(config.engine_config());
    engine
        .suggest(&request)
        .map_err(|source| CliError::InvalidSuggestRequest {
            path: config.request_path.clone(),
            source,
        })
}

/// Loads a JSON-encoded [`SuggestRequest`] from disk.
pub(crate) fn load_suggest_request(path: &Utf8Path) -> Result<SuggestRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenSuggestRequest {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        CliError::ParseSuggestRequest {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SuggestConfig, CliError> {
    let merged = SuggestArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SuggestConfig::try_from(merged)
}
