//! Filter engine - selects and orders catalog entries
//!
//! This module contains pure filtering logic with no I/O dependencies.
//! An entry passes when every predicate holds; predicates are tested
//! cheapest first (year, category, status, then text).

use std::cmp::{Ordering, Reverse};

use crate::core::models::{Entry, FilterCriteria};

/// Filter `entries` by `criteria` and sort the survivors
///
/// Results are ordered by descending `year_from`, then by title using
/// [`collate`]. The sort is stable, so identical keys keep input order
/// and repeated calls return the same sequence.
#[must_use]
pub fn filter_entries<'a>(entries: &'a [Entry], criteria: &FilterCriteria) -> Vec<&'a Entry> {
    let mut results: Vec<&Entry> = entries.iter().filter(|e| matches(e, criteria)).collect();
    results.sort_by_cached_key(|e| (Reverse(e.year_from), CollationKey::new(&e.title)));

    log::debug!("filter kept {} of {} entries", results.len(), entries.len());
    results
}

/// Check whether a single entry satisfies all criteria
#[must_use]
pub fn matches(entry: &Entry, criteria: &FilterCriteria) -> bool {
    in_years(entry, criteria)
        && in_category(entry, criteria)
        && status_ok(entry, criteria)
        && in_text(entry, criteria)
}

fn in_years(entry: &Entry, criteria: &FilterCriteria) -> bool {
    // yearTo is deliberately not consulted
    entry.year_from >= criteria.year_min() && entry.year_from <= criteria.year_max()
}

fn in_category(entry: &Entry, criteria: &FilterCriteria) -> bool {
    let allowed = criteria.allowed_categories();
    allowed.is_empty() || allowed.contains(&entry.category)
}

fn status_ok(entry: &Entry, criteria: &FilterCriteria) -> bool {
    !criteria.is_verified_only() || entry.is_verified()
}

fn in_text(entry: &Entry, criteria: &FilterCriteria) -> bool {
    let term = criteria.search_term();
    term.is_empty() || searchable_text(entry).contains(term)
}

/// Lowercased `title summary tags body` used for substring search
#[must_use]
pub fn searchable_text(entry: &Entry) -> String {
    let mut text = String::with_capacity(
        entry.title.len() + entry.summary.len() + entry.body.as_ref().map_or(0, String::len) + 16,
    );
    text.push_str(&entry.title);
    text.push(' ');
    text.push_str(&entry.summary);
    text.push(' ');
    text.push_str(&entry.tags.join(" "));
    text.push(' ');
    text.push_str(entry.body.as_deref().unwrap_or(""));
    text.to_lowercase()
}

/// Compare two titles in natural alphabetic order
///
/// Letters compare case-insensitively first, with `ё` sorting alongside
/// `е`. Ties then put `е` before `ё`, then lowercase before uppercase.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    primary: String,
    // Lowercase without folding, so `е` sorts before `ё`.
    secondary: String,
    // Uppercase code points precede their lowercase forms in Latin and
    // Cyrillic, so reversing the raw order puts lowercase first.
    tertiary: Reverse<String>,
}

impl CollationKey {
    fn new(title: &str) -> Self {
        let secondary = title.to_lowercase();
        let primary = secondary.chars().map(|c| if c == 'ё' { 'е' } else { c }).collect();
        Self {
            primary,
            secondary,
            tertiary: Reverse(title.to_string()),
        }
    }
}
