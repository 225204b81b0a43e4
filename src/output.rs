//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Category, Entry};
use crate::core::services::{self, ExportedDocument, Node};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One entry in a result list
#[derive(Debug, Clone, Serialize)]
pub struct EntryCard {
    /// Entry title
    pub title: String,
    /// Entry summary
    pub summary: String,
    /// Category label
    pub category: String,
    /// Start year
    pub year_from: i32,
    /// Whether the entry is verified
    pub verified: bool,
}

impl From<&Entry> for EntryCard {
    fn from(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            summary: entry.summary.clone(),
            category: entry.category.to_string(),
            year_from: entry.year_from,
            verified: entry.is_verified(),
        }
    }
}

/// Result of a catalog query
#[derive(Debug, Clone, Serialize)]
pub struct ListResult {
    /// Number of matching entries
    pub count: usize,
    /// Matching entries in display order
    pub entries: Vec<EntryCard>,
}

impl ListResult {
    /// Build from filtered entries
    #[must_use]
    pub fn from_entries(entries: &[&Entry]) -> Self {
        Self {
            count: entries.len(),
            entries: entries.iter().map(|e| EntryCard::from(*e)).collect(),
        }
    }

    /// Summary line shown under the results
    #[must_use]
    pub fn count_message(&self) -> String {
        if self.count == 0 {
            "Nothing found.".to_string()
        } else {
            format!("Found {} entries", self.count)
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        for card in &self.entries {
            let mut badges = vec![badge(&card.category), badge(&card.year_from.to_string())];
            if card.verified {
                badges.push(badge("VERIFIED").green().to_string());
            }
            println!("{}", badges.join(" "));
            println!("  {}", card.title.bold());
            println!("  {}\n", card.summary.dimmed());
        }
        println!("{}", self.count_message());
    }
}

/// A source line in an entry detail
#[derive(Debug, Clone, Serialize)]
pub struct SourceLine {
    /// Link target
    pub url: String,
    /// Link text: the title or the URL
    pub label: String,
    /// Publisher, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Display-formatted publication date, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
}

impl SourceLine {
    fn render_human(&self) -> String {
        let mut line = format!("{} <{}>", self.label, self.url);
        if let Some(publisher) = &self.publisher {
            let _ = write!(line, " - {publisher}");
        }
        if let Some(published) = &self.published {
            let _ = write!(line, " ({published})");
        }
        line
    }
}

/// Full view of a single entry
#[derive(Debug, Clone, Serialize)]
pub struct EntryDetail {
    /// Entry title
    pub title: String,
    /// `category · year span`
    pub subtitle: String,
    /// Rendered body nodes
    pub body: Vec<Node>,
    /// Citations
    pub sources: Vec<SourceLine>,
}

impl From<&Entry> for EntryDetail {
    fn from(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            subtitle: format!("{} · {}", entry.category, entry.year_span()),
            body: entry.body.as_deref().map(services::render).unwrap_or_default(),
            sources: entry
                .sources
                .iter()
                .map(|s| SourceLine {
                    url: s.url.clone(),
                    label: s.label().to_string(),
                    publisher: s.publisher.clone(),
                    published: s.published_display(),
                })
                .collect(),
        }
    }
}

impl EntryDetail {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        println!("{}", self.title.bold());
        println!("{}\n", self.subtitle.dimmed());
        if !self.body.is_empty() {
            println!("{}\n", services::to_plain_text(&self.body));
        }
        println!("{}", "Sources".bold());
        if self.sources.is_empty() {
            println!("{}", "No sources".dimmed());
        }
        for source in &self.sources {
            println!("  - {}", source.render_human());
        }
    }
}

/// Result of exporting a document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResult {
    /// Where the document was written, if it was saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The exported document
    pub document: ExportedDocument,
}

impl DocumentResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.path {
                Some(path) => {
                    println!("{}", self.document.contents);
                    println!("\nSaved {path}");
                },
                None => print!("{}", self.document.contents),
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// The category enumeration
#[derive(Debug, Clone, Serialize)]
pub struct CategoryList {
    /// Labels in display order
    pub categories: Vec<String>,
}

impl Default for CategoryList {
    fn default() -> Self {
        Self {
            categories: Category::ALL.iter().map(ToString::to_string).collect(),
        }
    }
}

impl CategoryList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                for category in &self.categories {
                    println!("{category}");
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

/// Plain text payload, such as issue text or rendered markup
#[derive(Debug, Clone, Serialize)]
pub struct TextResult {
    /// The text
    pub text: String,
}

impl TextResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.text),
            OutputMode::Json => render_json(self),
        }
    }
}

fn badge(text: &str) -> String {
    format!("[{text}]")
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
