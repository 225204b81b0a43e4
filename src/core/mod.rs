//! Core domain logic for annals
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Entry, Category, FilterCriteria, FormEntry)
//! - `services/` - Filtering, form reading, serialization, markup rendering
//! - `ports/` - Trait definitions for the entry source and document sink

pub mod models;
pub mod ports;
pub mod services;
