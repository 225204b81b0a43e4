//! Show command - display one entry in full

use annals::adapters::JsonFileSource;
use annals::config::AnnalsConfig;
use annals::core::ports::EntrySource;
use annals::output::{EntryDetail, OutputMode};

/// Show the entry whose title matches `title`, ignoring case
pub fn show(config: &AnnalsConfig, title: &str, mode: OutputMode) -> anyhow::Result<()> {
    let source = JsonFileSource::new(&config.catalog.path);
    log::debug!("reading catalog from {}", source.path().display());
    let entries = source.load_or_empty();
    let wanted = title.trim().to_lowercase();

    let Some(entry) = entries.iter().find(|e| e.title.to_lowercase() == wanted) else {
        anyhow::bail!("No entry titled \"{}\"", title.trim());
    };

    EntryDetail::from(entry).render(mode);
    Ok(())
}
