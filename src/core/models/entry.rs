//! Entry model
//!
//! An entry is one catalog record: an event, law or incident with a year
//! span, a category, a verification status and a list of citations.
//! Entries are supplied by an external data source and never mutated.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use super::Category;

/// Editorial verification status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// Confirmed by an editor
    Verified,
    /// Not (yet) confirmed; any unrecognized status also lands here
    #[default]
    #[serde(other)]
    Unverified,
}

impl Status {
    /// Whether this status counts as verified
    #[must_use]
    pub const fn is_verified(self) -> bool {
        matches!(self, Self::Verified)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verified => write!(f, "VERIFIED"),
            Self::Unverified => write!(f, "UNVERIFIED"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "VERIFIED" => Ok(Self::Verified),
            "UNVERIFIED" => Ok(Self::Unverified),
            _ => Err(format!("Invalid status: {s}. Use: VERIFIED, UNVERIFIED")),
        }
    }
}

/// A citation attached to an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Link to the cited material
    pub url: String,

    /// Headline of the cited material
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Outlet or organization that published it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Publication date, usually `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl Source {
    /// Create a source with only a URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            publisher: None,
            published_at: None,
        }
    }

    /// Text to show for the link: the title, or the URL when untitled
    #[must_use]
    pub fn label(&self) -> &str {
        self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or(&self.url)
    }

    /// Publication date formatted for display
    #[must_use]
    pub fn published_display(&self) -> Option<String> {
        self.published_at.as_deref().map(format_date)
    }
}

/// A catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Display title
    pub title: String,

    /// One-paragraph summary
    pub summary: String,

    /// Subject area
    pub category: Category,

    /// Year the entry becomes relevant (primary sort and filter key)
    pub year_from: i32,

    /// Year relevance ends; absent while ongoing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_to: Option<i32>,

    /// Verification status
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,

    /// Searchable keywords
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Long-form text in the lightweight markup dialect
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Citations, in the order given
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<Source>,
}

/// Read an explicit `null` the same way as a missing field
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Entry {
    /// Year span for display: `2019` or `2019–2022`
    #[must_use]
    pub fn year_span(&self) -> String {
        format_year_span(self.year_from, self.year_to)
    }

    /// Whether the entry carries the verified status
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.status.is_verified()
    }
}

/// Format a year span, omitting the end year when absent
#[must_use]
pub fn format_year_span(from: i32, to: Option<i32>) -> String {
    to.map_or_else(|| from.to_string(), |to| format!("{from}–{to}"))
}

/// Format an ISO date as `DD.MM.YYYY`, passing anything else through
#[must_use]
pub fn format_date(raw: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d.%m.%Y").to_string();
    }
    raw.to_string()
}
