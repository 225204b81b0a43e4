//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - Entry collection read from a JSON document
//! - `file/` - Exported documents written into a directory

pub mod file;
pub mod json;

pub use file::DirectorySink;
pub use json::{JsonFileSource, parse_catalog};
