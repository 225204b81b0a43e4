//! List command - filter the catalog

use annals::adapters::JsonFileSource;
use annals::config::AnnalsConfig;
use annals::core::models::{Category, FilterCriteria};
use annals::core::ports::EntrySource;
use annals::core::services::filter_entries;
use annals::output::{ListResult, OutputMode};

/// Filter selections given on the command line
#[derive(Debug, Default)]
pub struct ListFilters {
    /// Search term
    pub query: Option<String>,
    /// Lower year bound, defaults to the configured one
    pub year_min: Option<i32>,
    /// Upper year bound, defaults to the configured one
    pub year_max: Option<i32>,
    /// Allowed categories; empty means all
    pub categories: Vec<Category>,
    /// Only verified entries
    pub verified: bool,
}

/// Filter the catalog and print the matches
pub fn list(config: &AnnalsConfig, filters: ListFilters, mode: OutputMode) {
    let source = JsonFileSource::new(&config.catalog.path);
    log::debug!("reading catalog from {}", source.path().display());
    let entries = source.load_or_empty();

    let criteria = FilterCriteria::new(
        filters.year_min.unwrap_or(config.filter.year_min),
        filters.year_max.unwrap_or(config.filter.year_max),
    )
    .search(filters.query.as_deref().unwrap_or(""))
    .categories(filters.categories)
    .verified_only(filters.verified);

    let results = filter_entries(&entries, &criteria);
    ListResult::from_entries(&results).render(mode);
}
