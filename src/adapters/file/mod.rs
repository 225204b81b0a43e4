//! Directory document sink
//!
//! Writes exported documents into a directory under their suggested
//! filename, creating the directory if needed.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::core::ports::DocumentSink;
use crate::core::services::ExportedDocument;

/// Document sink that writes files into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink writing into `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DocumentSink for DirectorySink {
    fn save(&self, document: &ExportedDocument) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create {}", self.dir.display()))?;

        let path = self.dir.join(&document.filename);
        fs::write(&path, &document.contents)
            .with_context(|| format!("failed to write {}", path.display()))?;

        log::debug!("wrote {} ({})", path.display(), document.content_type);
        Ok(path)
    }
}
