//! Catalog loading from JSON files.
//!
//! # Responsibility
//! - Read `[ProjectRecord, ...]` arrays written in the page's field naming.
//! - Report I/O and decode failures with the offending path.

use super::Catalog;
use crate::model::project::ProjectRecord;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Error raised while loading a catalog or record file.
#[derive(Debug)]
pub enum CatalogLoadError {
    /// File could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File content is not a valid catalog payload.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for CatalogLoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "invalid catalog json in `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for CatalogLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Parses a catalog from a JSON array of records.
pub fn catalog_from_json(json: &str) -> Result<Catalog, serde_json::Error> {
    serde_json::from_str(json)
}

/// Loads a catalog file.
///
/// # Errors
/// - `Io` when the file cannot be read.
/// - `Json` when any record misses a required field or has a wrong type.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let raw = read_file(path)?;
    let catalog = catalog_from_json(&raw).map_err(|source| CatalogLoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "event=catalog_load module=catalog status=ok records={}",
        catalog.len()
    );
    Ok(catalog)
}

/// Loads a single project record file, used for appends.
pub fn load_record(path: &Path) -> Result<ProjectRecord, CatalogLoadError> {
    let raw = read_file(path)?;
    serde_json::from_str(&raw).map_err(|source| CatalogLoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn read_file(path: &Path) -> Result<String, CatalogLoadError> {
    std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
