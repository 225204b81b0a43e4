//! Centralized path definitions for annals
//!
//! This module provides a single source of truth for the filesystem paths
//! annals looks at.
//!
//! ## Layout
//!
//! ```text
//! project/
//! ├── annals.toml               # Project configuration (optional)
//! └── data/
//!     └── entries.json          # Entry collection
//!
//! <user config dir>/annals/
//! └── config.toml               # User-level configuration (optional)
//! ```

use std::path::PathBuf;

/// Project configuration filename
pub const PROJECT_CONFIG: &str = "annals.toml";

/// Default location of the entry collection, relative to the project
pub const DEFAULT_CATALOG: &str = "data/entries.json";

/// User config directory name
const USER_DIR: &str = "annals";

/// User config filename
const USER_CONFIG_FILE: &str = "config.toml";

/// Get path to the project configuration file.
///
/// Returns `./annals.toml`.
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG)
}

/// Get the user-level annals directory.
///
/// Returns `<user config dir>/annals/`, e.g. `~/.config/annals/` on Linux.
#[must_use]
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join(USER_DIR)
}

/// Get the user-level configuration file path.
#[must_use]
pub fn user_config() -> PathBuf {
    user_config_dir().join(USER_CONFIG_FILE)
}

/// Configuration files in lookup order, most specific first
#[must_use]
pub fn config_candidates() -> Vec<PathBuf> {
    vec![project_config(), user_config()]
}
