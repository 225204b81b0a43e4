//! Domain models for annals
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Entry`] - A catalog record with its [`Source`] citations
//! - [`Category`] - The closed set of subject areas
//! - [`FilterCriteria`] - What the catalog browser is asking for
//! - [`RawForm`] / [`FormEntry`] - Authoring input before and after validation

mod category;
mod criteria;
mod entry;
mod form;

pub use category::{Category, CategoryParseError};
pub use criteria::FilterCriteria;
pub use entry::{Entry, Source, Status, format_date, format_year_span};
pub(crate) use entry::null_as_default;
pub use form::{
    COUNTRY, FormEntry, RawForm, RawSource, ValidationError, YEAR_FROM_MAX, YEAR_FROM_MIN,
};
