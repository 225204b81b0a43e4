//! Render command - show a markup body as plain text or HTML

use std::fs;
use std::path::Path;

use anyhow::Context;

use annals::core::services::{render as render_markup, to_html, to_plain_text};
use annals::output::{OutputMode, TextResult};

/// Render the body text in `file`
pub fn render(file: &Path, html: bool, mode: OutputMode) -> anyhow::Result<()> {
    let body =
        fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let nodes = render_markup(&body);

    if mode == OutputMode::Json && !html {
        println!("{}", serde_json::to_string_pretty(&nodes)?);
        return Ok(());
    }

    let text = if html { to_html(&nodes) } else { to_plain_text(&nodes) };
    TextResult { text }.render(mode);
    Ok(())
}
