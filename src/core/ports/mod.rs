//! Port traits (interfaces) for external dependencies
//!
//! The core receives entries and hands out documents through these
//! traits. Implementations live in the `adapters` module.

mod document_sink;
mod entry_source;

pub use document_sink::DocumentSink;
pub use entry_source::{EntrySource, SourceLoadError};
