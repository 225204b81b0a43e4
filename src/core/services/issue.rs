//! Issue text - a plain summary for pasting into an issue tracker
//!
//! Line-oriented and human-readable. Not the canonical document and not
//! parsed anywhere else.

use crate::core::models::{FormEntry, format_year_span};

/// Render a validated entry as issue text
#[must_use]
pub fn issue_text(form: &FormEntry) -> String {
    let mut lines = vec![
        format!("Title: {}", form.title),
        format!("Category: {}", form.category),
        format!("Year: {}", format_year_span(form.year_from, form.year_to)),
        format!("Summary: {}", form.summary),
        format!("Legal reference: {}", form.legal_ref.as_deref().unwrap_or("-")),
        "Sources:".to_string(),
    ];

    if form.sources.is_empty() {
        lines.push("- (add at least one URL)".to_string());
    }
    for source in &form.sources {
        match source.title.as_deref() {
            Some(title) => lines.push(format!("- {} ({title})", source.url)),
            None => lines.push(format!("- {}", source.url)),
        }
    }

    lines.push(String::new());
    lines.push("Text:".to_string());
    lines.push(if form.body.is_empty() {
        "(empty)".to_string()
    } else {
        form.body.clone()
    });

    lines.join("\n")
}
