//! Lightweight markup renderer
//!
//! Turns an entry body into a flat sequence of display nodes. This is a
//! one-pass substitution, not a Markdown parser:
//!
//! 1. Lines starting with `### `, `## ` or `# ` become headings.
//! 2. Lines starting with `- ` become list items. Consecutive items are
//!    not grouped and nesting is not supported.
//! 3. Every `\n\n` becomes a paragraph break.
//! 4. `[text](url)` becomes a link that opens in a new browsing context.
//!
//! Text is never escaped. [`to_html`] emits it verbatim, so bodies must
//! come from trusted authors.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `target` attribute of rendered links
pub const LINK_TARGET: &str = "_blank";

/// `rel` attribute of rendered links
pub const LINK_REL: &str = "noopener";

/// `class` attribute of rendered links, marking an external source
pub const LINK_CLASS: &str = "source";

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));

/// Heading markers, most specific first
const HEADINGS: [(&str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

const LIST_MARKER: &str = "- ";

/// Inline content of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Inline {
    /// Plain text
    Text {
        /// The text
        text: String,
    },
    /// Link to an external source, opened in a new browsing context
    Link {
        /// Visible text
        text: String,
        /// Link target
        href: String,
    },
}

impl Inline {
    fn text(s: &str) -> Self {
        Self::Text {
            text: s.to_string(),
        }
    }
}

/// A rendered display node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Heading of level 1 to 3
    Heading {
        /// Heading level
        level: u8,
        /// Heading content
        content: Vec<Inline>,
    },
    /// A standalone list item
    ListItem {
        /// Item content
        content: Vec<Inline>,
    },
    /// Empty paragraph separating blocks
    ParagraphBreak,
    /// Running text between blocks
    Text {
        /// Text content, may contain single newlines
        content: Vec<Inline>,
    },
}

/// Render a markup body into display nodes
///
/// Total over any input. Whitespace-only text between blocks is dropped.
#[must_use]
pub fn render(body: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut pending = String::new();

    let mut lines = body.split('\n').peekable();
    while let Some(line) = lines.next() {
        match block_for_line(line) {
            Some(block) => {
                push_text(&mut nodes, &pending);
                pending.clear();
                nodes.push(block);
            },
            None => pending.push_str(line),
        }
        if lines.peek().is_some() {
            pending.push('\n');
        }
    }
    push_text(&mut nodes, &pending);
    nodes
}

fn block_for_line(line: &str) -> Option<Node> {
    for (marker, level) in HEADINGS {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some(Node::Heading {
                level,
                content: inlines(rest),
            });
        }
    }
    line.strip_prefix(LIST_MARKER).map(|rest| Node::ListItem {
        content: inlines(rest),
    })
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    let mut segments = text.split("\n\n").peekable();
    while let Some(segment) = segments.next() {
        if !segment.trim().is_empty() {
            nodes.push(Node::Text {
                content: inlines(segment),
            });
        }
        if segments.peek().is_some() {
            nodes.push(Node::ParagraphBreak);
        }
    }
}

/// Split text into plain runs and `[text](url)` links
#[must_use]
pub fn inlines(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut last = 0;
    for caps in LINK_RE.captures_iter(text) {
        let (Some(whole), Some(label), Some(href)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        if whole.start() > last {
            out.push(Inline::text(&text[last..whole.start()]));
        }
        out.push(Inline::Link {
            text: label.as_str().to_string(),
            href: href.as_str().to_string(),
        });
        last = whole.end();
    }
    if last < text.len() {
        out.push(Inline::text(&text[last..]));
    }
    out
}

/// Emit nodes as HTML, matching the substitution output
#[must_use]
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Heading { level, content } => {
                let _ = write!(out, "<h{level}>");
                write_inline_html(&mut out, content);
                let _ = write!(out, "</h{level}>");
            },
            Node::ListItem { content } => {
                out.push_str("<li>");
                write_inline_html(&mut out, content);
                out.push_str("</li>");
            },
            Node::ParagraphBreak => out.push_str("<p></p>"),
            Node::Text { content } => write_inline_html(&mut out, content),
        }
    }
    out
}

fn write_inline_html(out: &mut String, content: &[Inline]) {
    for inline in content {
        match inline {
            Inline::Text { text } => out.push_str(text),
            Inline::Link { text, href } => {
                let _ = write!(
                    out,
                    "<a class=\"{LINK_CLASS}\" href=\"{href}\" target=\"{LINK_TARGET}\" rel=\"{LINK_REL}\">{text}</a>"
                );
            },
        }
    }
}

/// Emit nodes as terminal-friendly plain text
#[must_use]
pub fn to_plain_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Heading { level, content } => {
                let text = inline_plain(content);
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                let _ = writeln!(out, "{} {text}", "#".repeat(usize::from(*level)));
            },
            Node::ListItem { content } => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                let _ = writeln!(out, "  • {}", inline_plain(content));
            },
            Node::ParagraphBreak => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push('\n');
            },
            Node::Text { content } => out.push_str(inline_plain(content).trim_matches('\n')),
        }
    }
    out
}

fn inline_plain(content: &[Inline]) -> String {
    content
        .iter()
        .map(|inline| match inline {
            Inline::Text { text } => text.clone(),
            Inline::Link { text, href } => format!("{text} <{href}>"),
        })
        .collect()
}
