//! Tests for front-matter document export
//!
//! The header is checked by re-reading it with a YAML parser.

use annals::core::models::RawForm;
use annals::core::services::document::{CONTENT_TYPE, escape_quotes};
use annals::core::services::{export, read_form, serialize};
use serde_yaml_ng::Value;

use crate::common::valid_form;

/// Split a document into its parsed header and raw body
fn split(document: &str) -> (Value, String) {
    let rest = document.strip_prefix("---\n").expect("document starts with a delimiter");
    let (header, body) = rest.split_once("\n---\n\n").expect("header is closed");
    let value = serde_yaml_ng::from_str(header).expect("header is valid YAML");
    (value, body.to_string())
}

fn serialized(raw: &RawForm) -> String {
    serialize(&read_form(raw).unwrap())
}

#[test]
fn test_header_reparses_as_yaml() {
    let (header, body) = split(&serialized(&valid_form()));

    assert_eq!(header["slug"].as_str(), Some("vpn-ban"));
    assert_eq!(header["title"].as_str(), Some("Запрет VPN"));
    assert_eq!(header["category"].as_str(), Some("ИНТЕРНЕТ"));
    assert_eq!(header["country"].as_str(), Some("RU"));
    assert_eq!(header["yearFrom"].as_i64(), Some(2017));
    assert!(header["yearTo"].is_null());
    assert!(header["legalRef"].is_null());
    assert_eq!(header["status"].as_str(), Some("VERIFIED"));
    assert_eq!(body, "# Предыстория\n\nТекст.");
}

#[test]
fn test_tags_are_a_sequence() {
    let (header, _) = split(&serialized(&valid_form()));
    let tags: Vec<&str> = header["tags"]
        .as_sequence()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(tags, vec!["vpn", "блокировки"]);
}

#[test]
fn test_sources_are_a_sequence_of_mappings() {
    let mut raw = valid_form();
    raw.sources[1].url = "https://example.org/second".to_string();
    raw.sources[1].published_at = "2017-07-30".to_string();

    let (header, _) = split(&serialized(&raw));
    let sources = header["sources"].as_sequence().unwrap();
    assert_eq!(sources.len(), 2);
    assert_eq!(sources[0]["url"].as_str(), Some("https://example.org/vpn"));
    assert_eq!(sources[0]["title"].as_str(), Some("Закон подписан"));
    assert!(sources[0].get("publisher").is_none());
    assert_eq!(sources[1]["publishedAt"].as_str(), Some("2017-07-30"));
}

#[test]
fn test_quoted_title_round_trips() {
    let mut raw = valid_form();
    raw.title = "Закон о \"нежелательных\" организациях".to_string();
    let (header, _) = split(&serialized(&raw));
    assert_eq!(header["title"].as_str(), Some("Закон о \"нежелательных\" организациях"));
}

#[test]
fn test_optional_fields_present_when_filled() {
    let mut raw = valid_form();
    raw.year_to = "2019".to_string();
    raw.date_start = "2017-11-01".to_string();
    raw.legal_ref = "276-ФЗ".to_string();
    let (header, _) = split(&serialized(&raw));
    assert_eq!(header["yearTo"].as_i64(), Some(2019));
    assert_eq!(header["dateStart"].as_str(), Some("2017-11-01"));
    assert_eq!(header["legalRef"].as_str(), Some("276-ФЗ"));
    assert!(header["dateEnd"].is_null());
}

#[test]
fn test_body_may_contain_delimiters() {
    let mut raw = valid_form();
    raw.body = "before\n---\nafter".to_string();
    let document = serialized(&raw);
    assert!(document.ends_with("---\n\nbefore\n---\nafter"));
}

#[test]
fn test_export_metadata() {
    let doc = export(&read_form(&valid_form()).unwrap());
    assert_eq!(doc.filename, "2017-vpn-ban.md");
    assert_eq!(doc.content_type, CONTENT_TYPE);
    assert!(doc.contents.starts_with("---\nslug: \"vpn-ban\"\n"));
}

#[test]
fn test_escape_quotes_leaves_other_characters() {
    assert_eq!(escape_quotes(r#"a "b" \c"#), r#"a \"b\" \c"#);
}
