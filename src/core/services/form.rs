//! Form reader - validates raw authoring input
//!
//! Converts a [`RawForm`] into a [`FormEntry`]. All text is trimmed,
//! tags are split on commas, and source rows without a URL are dropped.
//! Serialization is only attempted on a form that passed this step.

use crate::core::models::{
    COUNTRY, Category, FormEntry, RawForm, RawSource, Source, Status, ValidationError,
    YEAR_FROM_MAX, YEAR_FROM_MIN,
};

/// Validate and normalize raw form input
///
/// # Errors
///
/// Returns a [`ValidationError`] when the category or status is unknown,
/// `yearFrom` is not an integer in range, `yearTo` is malformed, or no
/// source row has a URL.
pub fn read_form(raw: &RawForm) -> Result<FormEntry, ValidationError> {
    let category = raw.category.trim();
    let category = category
        .parse::<Category>()
        .map_err(|_| ValidationError::UnknownCategory(category.to_string()))?;

    let status = raw.status.trim();
    let status = status
        .parse::<Status>()
        .map_err(|_| ValidationError::UnknownStatus(status.to_string()))?;

    let year_from = parse_year_from(&raw.year_from)?;

    let year_to = match non_empty(&raw.year_to) {
        Some(y) => Some(y.parse::<i32>().map_err(|_| ValidationError::InvalidYearTo(y))?),
        None => None,
    };

    let sources: Vec<Source> = raw.sources.iter().filter_map(read_source).collect();
    if sources.is_empty() {
        return Err(ValidationError::NoSources);
    }

    Ok(FormEntry {
        slug: raw.slug.trim().to_string(),
        title: raw.title.trim().to_string(),
        summary: raw.summary.trim().to_string(),
        category,
        tags: split_tags(&raw.tags),
        country: COUNTRY.to_string(),
        year_from,
        year_to,
        date_start: non_empty(&raw.date_start),
        date_end: non_empty(&raw.date_end),
        impact: raw.impact.trim().to_string(),
        legal_ref: non_empty(&raw.legal_ref),
        status,
        sources,
        body: raw.body.trim().to_string(),
    })
}

/// Parse `yearFrom` and check it against the accepted range
///
/// # Errors
///
/// Returns [`ValidationError::InvalidYear`] or
/// [`ValidationError::YearOutOfRange`].
pub fn parse_year_from(raw: &str) -> Result<i32, ValidationError> {
    let raw = raw.trim();
    let year: i32 = raw.parse().map_err(|_| ValidationError::InvalidYear(raw.to_string()))?;
    if !(YEAR_FROM_MIN..=YEAR_FROM_MAX).contains(&year) {
        return Err(ValidationError::YearOutOfRange(year));
    }
    Ok(year)
}

/// Split comma-separated tags, trimming and dropping empty pieces
#[must_use]
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty()).map(String::from).collect()
}

fn read_source(row: &RawSource) -> Option<Source> {
    let url = non_empty(&row.url)?;
    Some(Source {
        url,
        title: non_empty(&row.title),
        publisher: non_empty(&row.publisher),
        published_at: non_empty(&row.published_at),
    })
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
