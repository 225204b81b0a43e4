//! Form file loading - reads raw form values from TOML and validates them

use std::fs;
use std::path::Path;

use anyhow::Context;

use annals::core::models::{FormEntry, RawForm};
use annals::core::services::read_form;

/// Load a raw form from a TOML file
pub fn load_raw(path: &Path) -> anyhow::Result<RawForm> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read form {}", path.display()))?;
    let raw = toml::from_str(&content)
        .with_context(|| format!("invalid form file {}", path.display()))?;
    Ok(raw)
}

/// Load and validate a form, surfacing validation messages as errors
pub fn load(path: &Path) -> anyhow::Result<FormEntry> {
    let raw = load_raw(path)?;
    let form = read_form(&raw)?;
    log::debug!("form {} validated ({} source(s))", path.display(), form.sources.len());
    Ok(form)
}
