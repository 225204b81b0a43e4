//! Entry source port
//!
//! Defines where the entry collection comes from.

use thiserror::Error;

use crate::core::models::Entry;

/// Failure to obtain the entry collection
#[derive(Debug, Error)]
pub enum SourceLoadError {
    /// The collection could not be read
    #[error("failed to read entry collection from {location}: {source}")]
    Unavailable {
        /// Where the collection was expected
        location: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The collection was read but is not a valid entries document
    #[error("malformed entry collection at {location}: {source}")]
    Malformed {
        /// Where the collection came from
        location: String,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

/// Provider of the read-only entry collection
///
/// Implementations fetch once; the core never writes back.
pub trait EntrySource {
    /// Load every entry
    fn load(&self) -> Result<Vec<Entry>, SourceLoadError>;

    /// Load every entry, degrading to an empty collection on failure
    fn load_or_empty(&self) -> Vec<Entry> {
        match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("{e}; continuing with an empty catalog");
                Vec::new()
            },
        }
    }
}
