//! Property-based tests for the filter engine
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::cmp::Ordering;

use annals::core::models::{Category, Entry, FilterCriteria, Status};
use annals::core::services::filter::matches;
use annals::core::services::{collate, filter_entries};
use proptest::prelude::*;

fn category() -> impl Strategy<Value = Category> {
    (0..Category::ALL.len()).prop_map(|i| Category::ALL[i])
}

fn entry() -> impl Strategy<Value = Entry> {
    (
        "[a-zA-Zа-яА-ЯёЁ ]{1,12}",
        "[a-zа-я ]{0,20}",
        category(),
        2005..2030i32,
        any::<bool>(),
        prop::collection::vec("[a-zа-я]{1,6}", 0..3),
    )
        .prop_map(|(title, summary, category, year_from, verified, tags)| Entry {
            title,
            summary,
            category,
            year_from,
            year_to: None,
            status: if verified { Status::Verified } else { Status::Unverified },
            tags,
            body: None,
            sources: Vec::new(),
        })
}

fn catalog() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(entry(), 0..24)
}

fn owned(results: &[&Entry]) -> Vec<Entry> {
    results.iter().map(|e| (*e).clone()).collect()
}

proptest! {
    /// Unrestricted criteria keep every entry
    #[test]
    fn unrestricted_criteria_keep_everything(entries in catalog()) {
        let criteria = FilterCriteria::new(i32::MIN, i32::MAX);
        prop_assert_eq!(filter_entries(&entries, &criteria).len(), entries.len());
    }

    /// Filtering the result again with the same criteria changes nothing
    #[test]
    fn filtering_is_idempotent(
        entries in catalog(),
        min in 2005..2030i32,
        max in 2005..2030i32,
        verified in any::<bool>(),
    ) {
        let criteria = FilterCriteria::new(min, max).verified_only(verified);
        let once = owned(&filter_entries(&entries, &criteria));
        let twice = owned(&filter_entries(&once, &criteria));
        prop_assert_eq!(once, twice);
    }

    /// Results are exactly the entries that match, nothing is lost
    #[test]
    fn results_partition_the_input(
        entries in catalog(),
        term in "[a-zа-я]{0,2}",
        min in 2005..2030i32,
        max in 2005..2030i32,
    ) {
        let criteria = FilterCriteria::new(min, max).search(&term);
        let results = filter_entries(&entries, &criteria);
        let expected = entries.iter().filter(|e| matches(e, &criteria)).count();
        prop_assert_eq!(results.len(), expected);
        prop_assert!(results.iter().all(|e| matches(e, &criteria)));
    }

    /// Results are ordered by descending year, then by title
    #[test]
    fn results_are_sorted(entries in catalog()) {
        let criteria = FilterCriteria::new(i32::MIN, i32::MAX);
        let results = filter_entries(&entries, &criteria);
        for pair in results.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.year_from >= b.year_from);
            if a.year_from == b.year_from {
                prop_assert_ne!(collate(&a.title, &b.title), Ordering::Greater);
            }
        }
    }

    /// A single selected category admits only that category
    #[test]
    fn singleton_category_admits_only_itself(entries in catalog(), wanted in category()) {
        let criteria = FilterCriteria::new(i32::MIN, i32::MAX).category(wanted);
        let results = filter_entries(&entries, &criteria);
        prop_assert!(results.iter().all(|e| e.category == wanted));
        let expected = entries.iter().filter(|e| e.category == wanted).count();
        prop_assert_eq!(results.len(), expected);
    }

    /// Search ignores the case of the term
    #[test]
    fn search_ignores_case(entries in catalog(), term in "[a-zа-я]{1,3}") {
        let lower = FilterCriteria::new(i32::MIN, i32::MAX).search(&term);
        let upper = FilterCriteria::new(i32::MIN, i32::MAX).search(&term.to_uppercase());
        prop_assert_eq!(filter_entries(&entries, &lower), filter_entries(&entries, &upper));
    }

    /// Swapping the year bounds gives the same result
    #[test]
    fn year_bounds_are_order_independent(
        entries in catalog(),
        a in 2005..2030i32,
        b in 2005..2030i32,
    ) {
        prop_assert_eq!(
            filter_entries(&entries, &FilterCriteria::new(a, b)),
            filter_entries(&entries, &FilterCriteria::new(b, a))
        );
    }

    /// Collation is antisymmetric
    #[test]
    fn collate_is_antisymmetric(a in "[a-zA-Zа-яА-ЯёЁ]{0,6}", b in "[a-zA-Zа-яА-ЯёЁ]{0,6}") {
        prop_assert_eq!(collate(&a, &b), collate(&b, &a).reverse());
    }
}
