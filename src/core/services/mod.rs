//! Business logic services
//!
//! Pure functions that operate on domain models. None of them touch the
//! filesystem or the network.
//!
//! - [`filter`] - Select and order catalog entries
//! - [`form`] - Validate raw authoring input
//! - [`document`] - Serialize an entry as front matter plus body
//! - [`markup`] - Render the lightweight body markup
//! - [`issue`] - Plain issue-tracker text

pub mod document;
pub mod filter;
pub mod form;
pub mod issue;
pub mod markup;

pub use document::{ExportedDocument, export, serialize};
pub use filter::{collate, filter_entries};
pub use form::read_form;
pub use issue::issue_text;
pub use markup::{Inline, Node, render, to_html, to_plain_text};
