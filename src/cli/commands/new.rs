//! New command - build a document from a form and save it

use std::path::Path;

use annals::adapters::DirectorySink;
use annals::config::AnnalsConfig;
use annals::core::ports::DocumentSink;
use annals::core::services::export;
use annals::output::{DocumentResult, OutputMode};

use super::form_file;

/// Validate a form file, serialize it and save or print the document
pub fn new(
    config: &AnnalsConfig,
    form_path: &Path,
    out: Option<&Path>,
    to_stdout: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let form = form_file::load(form_path)?;
    let document = export(&form);

    let path = if to_stdout {
        None
    } else {
        let sink = DirectorySink::new(out.unwrap_or(&config.export.dir));
        let path = sink.save(&document)?;
        log::info!("saved {}", path.display());
        Some(path.display().to_string())
    };

    DocumentResult { path, document }.render(mode);
    Ok(())
}
