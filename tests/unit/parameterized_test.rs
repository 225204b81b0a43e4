//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use annals::core::models::{Category, Status, ValidationError, format_date, format_year_span};
use annals::core::services::form::{parse_year_from, split_tags};
use annals::core::services::markup::{Inline, inlines};
use test_case::test_case;

// =============================================================================
// Year Validation Tests
// =============================================================================

#[test_case("2009", Err(ValidationError::YearOutOfRange(2009)) ; "below range")]
#[test_case("2010", Ok(2010) ; "lower bound")]
#[test_case("2025", Ok(2025) ; "upper bound")]
#[test_case("2026", Err(ValidationError::YearOutOfRange(2026)) ; "above range")]
#[test_case(" 2018 ", Ok(2018) ; "surrounding whitespace")]
#[test_case("20x8", Err(ValidationError::InvalidYear("20x8".to_string())) ; "not a number")]
#[test_case("", Err(ValidationError::InvalidYear(String::new())) ; "empty")]
#[test_case("2018.5", Err(ValidationError::InvalidYear("2018.5".to_string())) ; "fractional")]
fn test_parse_year_from(input: &str, expected: Result<i32, ValidationError>) {
    assert_eq!(parse_year_from(input), expected);
}

// =============================================================================
// Category and Status Parsing Tests
// =============================================================================

#[test_case("ЗАКОНЫ", Some(Category::Laws) ; "laws")]
#[test_case("ЦЕНЗУРА", Some(Category::Censorship) ; "censorship")]
#[test_case("ЛГБТ", Some(Category::Lgbt) ; "lgbt")]
#[test_case("ВЫБОРЫ", Some(Category::Elections) ; "elections")]
#[test_case("ДРУГОЕ", Some(Category::Other) ; "other")]
#[test_case("Законы", None ; "wrong case")]
#[test_case("LAWS", None ; "english name")]
#[test_case("", None ; "empty")]
fn test_category_parsing(input: &str, expected: Option<Category>) {
    assert_eq!(input.parse::<Category>().ok(), expected);
}

#[test_case("VERIFIED", Some(Status::Verified) ; "verified")]
#[test_case("verified", Some(Status::Verified) ; "lowercase verified")]
#[test_case("UNVERIFIED", Some(Status::Unverified) ; "unverified")]
#[test_case("PENDING", None ; "unknown")]
fn test_status_parsing(input: &str, expected: Option<Status>) {
    assert_eq!(input.parse::<Status>().ok(), expected);
}

// =============================================================================
// Formatting Tests
// =============================================================================

#[test_case(2019, None, "2019" ; "single year")]
#[test_case(2012, Some(2022), "2012–2022" ; "range")]
fn test_year_span(from: i32, to: Option<i32>, expected: &str) {
    assert_eq!(format_year_span(from, to), expected);
}

#[test_case("2022-03-04", "04.03.2022" ; "plain date")]
#[test_case("2022-03-04T12:30:00+03:00", "04.03.2022" ; "timestamp")]
#[test_case("март 2022", "март 2022" ; "free text passes through")]
fn test_format_date(input: &str, expected: &str) {
    assert_eq!(format_date(input), expected);
}

#[test_case("a, b, c", &["a", "b", "c"] ; "simple list")]
#[test_case("  a ,, b ,", &["a", "b"] ; "blank pieces dropped")]
#[test_case("", &[] ; "empty")]
#[test_case("single", &["single"] ; "one tag")]
fn test_split_tags(input: &str, expected: &[&str]) {
    assert_eq!(split_tags(input), expected);
}

// =============================================================================
// Inline Link Tests
// =============================================================================

#[test_case("no links", 1, 0 ; "plain text")]
#[test_case("[a](https://x.example)", 1, 1 ; "only a link")]
#[test_case("see [a](u) and [b](v).", 5, 2 ; "two links")]
#[test_case("[unclosed](https://x.example", 1, 0 ; "unclosed link")]
#[test_case("[](empty)", 1, 0 ; "empty link text")]
fn test_inline_links(input: &str, parts: usize, links: usize) {
    let out = inlines(input);
    assert_eq!(out.len(), parts, "{out:?}");
    assert_eq!(out.iter().filter(|i| matches!(i, Inline::Link { .. })).count(), links);
}
