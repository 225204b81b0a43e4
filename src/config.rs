//! Configuration management
//!
//! Settings come from the first file found among an explicit `--config`
//! path, `./annals.toml` and `<user config dir>/annals/config.toml`.
//! When none exists, defaults apply.
//!
//! ```toml
//! [catalog]
//! path = "data/entries.json"
//!
//! [filter]
//! year_min = 2010
//! year_max = 2025
//!
//! [export]
//! dir = "drafts"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{FilterCriteria, YEAR_FROM_MAX, YEAR_FROM_MIN};
use crate::paths;

/// annals configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnalsConfig {
    /// Where the entry collection lives
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Default filter bounds
    #[serde(default)]
    pub filter: FilterConfig,
    /// Where exported documents go
    #[serde(default)]
    pub export: ExportConfig,
}

/// Entry collection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the JSON entry collection
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(paths::DEFAULT_CATALOG)
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Default year range for the catalog filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Lower year bound
    #[serde(default = "default_year_min")]
    pub year_min: i32,
    /// Upper year bound
    #[serde(default = "default_year_max")]
    pub year_max: i32,
}

const fn default_year_min() -> i32 {
    YEAR_FROM_MIN
}

const fn default_year_max() -> i32 {
    YEAR_FROM_MAX
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            year_min: default_year_min(),
            year_max: default_year_max(),
        }
    }
}

impl FilterConfig {
    /// Unrestricted criteria over the configured year range
    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.year_min, self.year_max)
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exported documents are written to
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

impl AnnalsConfig {
    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve configuration
    ///
    /// An explicit path must exist and parse. Otherwise the first existing
    /// candidate from [`paths::config_candidates`] is used, or defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the selected file cannot be read or parsed.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        Self::resolve_from(&paths::config_candidates())
    }

    /// Use the first existing file among `candidates`, or defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an existing candidate cannot be read or parsed.
    pub fn resolve_from(candidates: &[PathBuf]) -> anyhow::Result<Self> {
        match candidates.iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from(path),
            None => {
                log::debug!("no config file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Serialize this configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
