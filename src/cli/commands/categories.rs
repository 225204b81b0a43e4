//! Categories command - print the category enumeration

use annals::output::{CategoryList, OutputMode};

/// Print every category in display order
pub fn categories(mode: OutputMode) {
    CategoryList::default().render(mode);
}
