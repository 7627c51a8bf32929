//! Catalog loading for the TrendRoute engine.
//!
//! Responsibilities:
//! - Decode [`CatalogSnapshot`]s from JSON, either the snapshot embedded in
//!   this crate or a file on disk.
//! - Reject snapshots whose identifiers or trend scores are inconsistent.
//!
//! Boundaries:
//! - Ranking and scoring rules live in `trendroute-core` and
//!   `trendroute-scorer`; this crate only produces validated data.

use std::collections::HashSet;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use trendroute_core::{CatalogHandle, CatalogSnapshot};

/// JSON catalog compiled into the crate.
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Errors raised while reading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog at {path:?}: {source}")]
    Read {
        /// File that failed.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The catalog JSON could not be decoded.
    #[error("failed to parse catalog from {origin}: {source}")]
    Parse {
        /// File path, or `builtin` for the embedded snapshot.
        origin: String,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// Two routes share an identifier.
    #[error("route id {route_id} appears more than once")]
    DuplicateRouteId {
        /// Repeated identifier.
        route_id: String,
    },
    /// A detail is stored under a key that differs from its own route id.
    #[error("route detail keyed {key} describes route {route_id}")]
    DetailKeyMismatch {
        /// Map key.
        key: String,
        /// Identifier inside the detail.
        route_id: String,
    },
    /// A trend score is not a finite value in `0.0..=1.0`.
    #[error("trend score {score} for {city} is outside 0.0..=1.0")]
    TrendScoreOutOfRange {
        /// City carrying the score.
        city: String,
        /// Offending score.
        score: f32,
    },
}

/// Decode and validate the embedded catalog.
///
/// # Errors
/// Returns [`CatalogError::Parse`] or a validation error if the embedded JSON
/// is malformed.
///
/// # Examples
/// ```
/// let catalog = trendroute_data::builtin_catalog().expect("embedded catalog");
/// assert_eq!(catalog.routes.len(), 4);
/// ```
pub fn builtin_catalog() -> Result<CatalogSnapshot, CatalogError> {
    parse_catalog(BUILTIN_CATALOG_JSON, "builtin")
}

/// Read, decode and validate a catalog file.
///
/// # Errors
/// Returns [`CatalogError::Read`] when the file cannot be read,
/// [`CatalogError::Parse`] for malformed JSON, or a validation error.
pub fn load_catalog(path: &Utf8Path) -> Result<CatalogSnapshot, CatalogError> {
    let contents = trendroute_fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot = parse_catalog(&contents, path.as_str())?;
    log::info!(
        "loaded catalog from {path}: {} routes, {} trends, {} details",
        snapshot.routes.len(),
        snapshot.trending_locations.len(),
        snapshot.route_details.len()
    );
    Ok(snapshot)
}

/// Load `path` and publish it through `handle`, returning the replaced
/// snapshot. On error the handle keeps its current snapshot.
///
/// # Errors
/// Propagates [`load_catalog`] failures.
pub fn reload_catalog(
    handle: &CatalogHandle,
    path: &Utf8Path,
) -> Result<Arc<CatalogSnapshot>, CatalogError> {
    let snapshot = load_catalog(path)?;
    Ok(handle.replace(snapshot))
}

/// Decode `json` and validate the result. `origin` names the source in errors.
///
/// # Errors
/// Returns [`CatalogError::Parse`] or a validation error.
pub fn parse_catalog(json: &str, origin: &str) -> Result<CatalogSnapshot, CatalogError> {
    let snapshot: CatalogSnapshot =
        serde_json::from_str(json).map_err(|source| CatalogError::Parse {
            origin: origin.to_owned(),
            source,
        })?;
    validate_snapshot(&snapshot)?;
    Ok(snapshot)
}

/// Check identifier uniqueness, detail keys and trend score ranges.
///
/// # Errors
/// Returns the first inconsistency found.
pub fn validate_snapshot(snapshot: &CatalogSnapshot) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for route in &snapshot.routes {
        if !seen.insert(route.route_id.as_str()) {
            return Err(CatalogError::DuplicateRouteId {
                route_id: route.route_id.clone(),
            });
        }
    }
    if let Some((key, detail)) = snapshot
        .route_details
        .iter()
        .find(|(key, detail)| **key != detail.route_id)
    {
        return Err(CatalogError::DetailKeyMismatch {
            key: key.clone(),
            route_id: detail.route_id.clone(),
        });
    }
    if let Some(trend) = snapshot
        .trending_locations
        .iter()
        .find(|trend| !(0.0..=1.0).contains(&trend.trend_score))
    {
        return Err(CatalogError::TrendScoreOutOfRange {
            city: trend.city.clone(),
            score: trend.trend_score,
        });
    }
    Ok(())
}
