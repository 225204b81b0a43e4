//! Tests for the body markup renderer

use annals::core::services::{Inline, Node, render, to_html, to_plain_text};

fn text(s: &str) -> Inline {
    Inline::Text { text: s.to_string() }
}

#[test]
fn test_heading_levels() {
    let nodes = render("### three\n## two\n# one");
    let levels: Vec<u8> = nodes
        .iter()
        .filter_map(|n| match n {
            Node::Heading { level, .. } => Some(*level),
            _ => None,
        })
        .collect();
    assert_eq!(levels, vec![3, 2, 1]);
}

#[test]
fn test_paragraphs_split_on_blank_lines() {
    let nodes = render("first\nline\n\nsecond");
    assert_eq!(
        nodes,
        vec![
            Node::Text { content: vec![text("first\nline")] },
            Node::ParagraphBreak,
            Node::Text { content: vec![text("second")] },
        ]
    );
}

#[test]
fn test_empty_body() {
    assert!(render("").is_empty());
    assert!(render("   \n  ").is_empty());
}

#[test]
fn test_html_output() {
    let html = to_html(&render("## Sources\n\n- [a](https://a.example)"));
    assert_eq!(
        html,
        "<h2>Sources</h2><p></p><li><a class=\"source\" href=\"https://a.example\" \
         target=\"_blank\" rel=\"noopener\">a</a></li>"
    );
}

#[test]
fn test_plain_text_output() {
    let plain = to_plain_text(&render("# Title\n\nIntro with [link](https://x.example).\n\n- one\n- two"));
    assert_eq!(
        plain,
        "# Title\n\nIntro with link <https://x.example>.\n\n  • one\n  • two\n"
    );
}

#[test]
fn test_node_json_is_tagged() {
    let value = serde_json::to_value(render("# T")).unwrap();
    assert_eq!(value[0]["kind"], "heading");
    assert_eq!(value[0]["level"], 1);
    assert_eq!(value[0]["content"][0]["text"], "T");
}
