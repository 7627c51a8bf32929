//! Error types emitted by the TrendRoute CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use trendroute_core::{ActivityError, SuggestError};
use trendroute_data::CatalogError;

/// Errors emitted by the TrendRoute CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path being inspected.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// The catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Opening the suggestion request file failed.
    #[error("failed to open suggestion request at {path:?}: {source}")]
    OpenSuggestRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Suggestion request JSON could not be decoded.
    #[error("failed to parse suggestion request JSON at {path:?}: {source}")]
    ParseSuggestRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The suggestion request was rejected by the engine.
    #[error("suggestion request in {path:?} was rejected: {source}")]
    InvalidSuggestRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Engine failure.
        #[source]
        source: SuggestError,
    },
    /// No itinerary exists for the requested route.
    #[error("route {route_id} not found")]
    RouteNotFound {
        /// Identifier that was looked up.
        route_id: String,
    },
    /// Feedback arguments were invalid.
    #[error("invalid feedback: {0}")]
    InvalidFeedback(#[from] ActivityError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
