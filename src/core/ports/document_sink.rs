//! Document sink port
//!
//! Defines where exported documents go.

use std::path::PathBuf;

use crate::core::services::ExportedDocument;

/// Destination for exported documents
pub trait DocumentSink {
    /// Persist a document, returning where it was written
    fn save(&self, document: &ExportedDocument) -> anyhow::Result<PathBuf>;
}
