//! JSON entry source
//!
//! Reads the catalog document: a top-level object whose `entries` field
//! holds the entry list. A missing `entries` field is an empty catalog.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::models::{Entry, null_as_default};
use crate::core::ports::{EntrySource, SourceLoadError};

/// The catalog document shape
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFile {
    /// All entries in the catalog
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<Entry>,
}

/// Parse a catalog document from JSON text
///
/// # Errors
///
/// Returns [`SourceLoadError::Malformed`] if the text is not a catalog.
pub fn parse_catalog(json: &str, location: &str) -> Result<Vec<Entry>, SourceLoadError> {
    let file: CatalogFile =
        serde_json::from_str(json).map_err(|source| SourceLoadError::Malformed {
            location: location.to_string(),
            source,
        })?;
    Ok(file.entries)
}

/// Entry source backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntrySource for JsonFileSource {
    fn load(&self) -> Result<Vec<Entry>, SourceLoadError> {
        let location = self.path.display().to_string();
        let content = fs::read_to_string(&self.path).map_err(|source| {
            SourceLoadError::Unavailable {
                location: location.clone(),
                source,
            }
        })?;
        let entries = parse_catalog(&content, &location)?;
        log::debug!("loaded {} entries from {location}", entries.len());
        Ok(entries)
    }
}
