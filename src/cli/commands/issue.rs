//! Issue command - print issue-tracker text for a form

use std::path::Path;

use annals::core::services::issue_text;
use annals::output::{OutputMode, TextResult};

use super::form_file;

/// Validate a form file and print it as issue text
pub fn issue(form_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let form = form_file::load(form_path)?;
    TextResult {
        text: issue_text(&form),
    }
    .render(mode);
    Ok(())
}
