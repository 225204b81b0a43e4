//! Filter criteria
//!
//! A value object rebuilt from the caller's current selections on every
//! query. Construction normalizes the input: inverted year bounds are
//! swapped and the search term is trimmed and lowercased, so the filter
//! engine can rely on `year_min <= year_max` and never re-normalizes.

use std::collections::BTreeSet;

use serde::Serialize;

use super::Category;

/// Criteria applied by the filter engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    search_term: String,
    year_min: i32,
    year_max: i32,
    categories: BTreeSet<Category>,
    verified_only: bool,
}

impl FilterCriteria {
    /// Criteria over an inclusive year range, swapping the bounds if inverted
    #[must_use]
    pub fn new(year_min: i32, year_max: i32) -> Self {
        let (year_min, year_max) = if year_min > year_max {
            (year_max, year_min)
        } else {
            (year_min, year_max)
        };
        Self {
            search_term: String::new(),
            year_min,
            year_max,
            categories: BTreeSet::new(),
            verified_only: false,
        }
    }

    /// Restrict to entries whose text contains `term` (case-insensitive)
    #[must_use]
    pub fn search(mut self, term: &str) -> Self {
        self.search_term = term.trim().to_lowercase();
        self
    }

    /// Restrict to the given categories; an empty set means no restriction
    #[must_use]
    pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Add one category to the allowed set
    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    /// Only keep verified entries when `on` is set
    #[must_use]
    pub fn verified_only(mut self, on: bool) -> Self {
        self.verified_only = on;
        self
    }

    /// Normalized (trimmed, lowercase) search term; empty when unset
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Inclusive lower year bound
    #[must_use]
    pub const fn year_min(&self) -> i32 {
        self.year_min
    }

    /// Inclusive upper year bound
    #[must_use]
    pub const fn year_max(&self) -> i32 {
        self.year_max
    }

    /// Allowed categories
    #[must_use]
    pub const fn allowed_categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    /// Whether only verified entries pass
    #[must_use]
    pub const fn is_verified_only(&self) -> bool {
        self.verified_only
    }
}
