//! Command implementations

mod categories;
mod config;
mod form_file;
mod issue;
mod list;
mod new;
mod render;
mod show;

pub use categories::categories;
pub use config::config;
pub use issue::issue;
pub use list::{ListFilters, list};
pub use new::new;
pub use render::render;
pub use show::show;
