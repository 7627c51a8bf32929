//! Catalog and input file resolution shared by the commands.

use camino::Utf8Path;
use trendroute_core::CatalogSnapshot;
use trendroute_data::{builtin_catalog, load_catalog};

use crate::{ARG_CATALOG, CliError};

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match trendroute_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) if path.exists() => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load the catalog at `path`, or the embedded one when no path is given.
pub(crate) fn load_snapshot(path: Option<&Utf8Path>) -> Result<CatalogSnapshot, CliError> {
    let snapshot = if let Some(file) = path {
        require_existing(file, ARG_CATALOG)?;
        load_catalog(file)?
    } else {
        log::debug!("using the embedded catalog");
        builtin_catalog()?
    };
    Ok(snapshot)
}
