//! Document serializer - front matter plus body
//!
//! Produces the portable document for an authored entry: a `---` framed
//! header of `key: value` lines in a fixed order, a blank line, then the
//! raw body. The header is a restricted YAML mapping.
//!
//! String values are double-quoted and only `"` is escaped. Newlines and
//! backslashes inside header strings pass through unchanged.

use std::fmt::Write;

use serde::Serialize;

use crate::core::models::{FormEntry, Source};

/// Front matter delimiter line
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// Content type offered alongside an exported document
pub const CONTENT_TYPE: &str = "text/markdown;charset=utf-8";

/// Extension of exported documents
pub const EXTENSION: &str = "md";

/// A serialized document with its export metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedDocument {
    /// Suggested filename: `{yearFrom}-{slug}.md`
    pub filename: String,
    /// MIME type for the contents
    pub content_type: &'static str,
    /// Full document text
    pub contents: String,
}

/// Serialize and name a validated entry for export
#[must_use]
pub fn export(form: &FormEntry) -> ExportedDocument {
    ExportedDocument {
        filename: filename(form),
        content_type: CONTENT_TYPE,
        contents: serialize(form),
    }
}

/// Filename for an exported entry
#[must_use]
pub fn filename(form: &FormEntry) -> String {
    format!("{}-{}.{EXTENSION}", form.year_from, form.slug)
}

/// Render a validated entry as front matter followed by its body
#[must_use]
pub fn serialize(form: &FormEntry) -> String {
    let mut out = String::new();
    out.push_str(FRONT_MATTER_DELIMITER);
    out.push('\n');

    let _ = writeln!(out, "slug: {}", quote(&form.slug));
    let _ = writeln!(out, "title: {}", quote(&form.title));
    let _ = writeln!(out, "summary: {}", quote(&form.summary));
    let _ = writeln!(out, "category: {}", quote(form.category.label()));
    let _ = writeln!(out, "tags: {}", tag_list(&form.tags));
    let _ = writeln!(out, "country: {}", quote(&form.country));
    let _ = writeln!(out, "yearFrom: {}", form.year_from);
    let _ = writeln!(out, "yearTo: {}", form.year_to.map(|y| y.to_string()).unwrap_or_default());
    let _ = writeln!(out, "dateStart: {}", optional(form.date_start.as_deref()));
    let _ = writeln!(out, "dateEnd: {}", optional(form.date_end.as_deref()));
    let _ = writeln!(out, "impact: {}", quote(&form.impact));
    let _ = writeln!(out, "legalRef: {}", optional(form.legal_ref.as_deref()));
    let _ = writeln!(out, "status: {}", quote(&form.status.to_string()));
    out.push_str("sources:\n");
    for source in &form.sources {
        write_source(&mut out, source);
    }

    out.push_str(FRONT_MATTER_DELIMITER);
    out.push_str("\n\n");
    out.push_str(&form.body);
    out
}

/// Escape double quotes with a backslash
#[must_use]
pub fn escape_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", escape_quotes(value))
}

fn optional(value: Option<&str>) -> String {
    value.map(quote).unwrap_or_default()
}

fn tag_list(tags: &[String]) -> String {
    let quoted: Vec<String> = tags.iter().map(|t| quote(t)).collect();
    format!("[{}]", quoted.join(", "))
}

fn write_source(out: &mut String, source: &Source) {
    let _ = writeln!(out, "  - url: {}", quote(&source.url));
    let fields = [
        ("title", source.title.as_deref()),
        ("publisher", source.publisher.as_deref()),
        ("publishedAt", source.published_at.as_deref()),
    ];
    for (key, value) in fields {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            let _ = writeln!(out, "    {key}: {}", quote(value));
        }
    }
}
