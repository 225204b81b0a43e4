//! Authoring form models
//!
//! [`RawForm`] holds field values exactly as a contributor typed them.
//! [`FormEntry`] is the validated, trimmed result that the document
//! serializer consumes. The conversion lives in `services::form`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Category, Source, Status};

/// Earliest year accepted for a new entry
pub const YEAR_FROM_MIN: i32 = 2010;

/// Latest year accepted for a new entry
pub const YEAR_FROM_MAX: i32 = 2025;

/// Country code stamped on every authored entry
pub const COUNTRY: &str = "RU";

/// Reasons a form cannot be turned into a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `yearFrom` is not an integer
    #[error("Year must be a whole number, got \"{0}\".")]
    InvalidYear(String),

    /// `yearFrom` lies outside the accepted range
    #[error("Year must be in the range {min}-{max}, got {0}.", min = YEAR_FROM_MIN, max = YEAR_FROM_MAX)]
    YearOutOfRange(i32),

    /// `yearTo` was given but is not an integer
    #[error("End year must be a whole number, got \"{0}\".")]
    InvalidYearTo(String),

    /// Category is not one of the known labels
    #[error("Unknown category \"{0}\".")]
    UnknownCategory(String),

    /// Status is neither VERIFIED nor UNVERIFIED
    #[error("Unknown status \"{0}\". Use VERIFIED or UNVERIFIED.")]
    UnknownStatus(String),

    /// No source row has a URL
    #[error("Add at least one source (URL).")]
    NoSources,
}

/// One source row as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSource {
    /// URL field
    pub url: String,
    /// Title field
    pub title: String,
    /// Publisher field
    pub publisher: String,
    /// Publication date field
    pub published_at: String,
}

/// Form field values before validation
///
/// Every field is free text, matching what an input element would hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawForm {
    /// Stable identifier used in the filename
    pub slug: String,
    /// Entry title
    pub title: String,
    /// Short summary
    pub summary: String,
    /// Category label
    pub category: String,
    /// Comma-separated tags
    pub tags: String,
    /// Start year
    pub year_from: String,
    /// End year, may be empty
    pub year_to: String,
    /// Start date, may be empty
    pub date_start: String,
    /// End date, may be empty
    pub date_end: String,
    /// Impact level label
    pub impact: String,
    /// Legal reference, may be empty
    pub legal_ref: String,
    /// Status label
    pub status: String,
    /// Source rows
    pub sources: Vec<RawSource>,
    /// Body text in the markup dialect
    pub body: String,
}

/// A validated entry ready for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEntry {
    /// Stable identifier
    pub slug: String,
    /// Entry title
    pub title: String,
    /// Short summary
    pub summary: String,
    /// Category
    pub category: Category,
    /// Tags, trimmed, empties dropped, order kept
    pub tags: Vec<String>,
    /// Country code, always [`COUNTRY`]
    pub country: String,
    /// Start year, within [`YEAR_FROM_MIN`]..=[`YEAR_FROM_MAX`]
    pub year_from: i32,
    /// End year
    pub year_to: Option<i32>,
    /// Start date
    pub date_start: Option<String>,
    /// End date
    pub date_end: Option<String>,
    /// Impact level
    pub impact: String,
    /// Legal reference
    pub legal_ref: Option<String>,
    /// Verification status
    pub status: Status,
    /// At least one source, each with a non-empty URL
    pub sources: Vec<Source>,
    /// Body text
    pub body: String,
}
