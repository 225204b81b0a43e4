//! Entry categories
//!
//! A closed, ordered set of subject-area labels. The same enumeration feeds
//! the catalog filter and the authoring form, so both always offer exactly
//! the same choices.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a label is not one of the known categories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

/// Subject area of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Legislation
    Laws,
    /// Censorship
    Censorship,
    /// Police actions
    Police,
    /// LGBT-related measures
    Lgbt,
    /// Internet restrictions
    Internet,
    /// Education
    Education,
    /// Culture
    Culture,
    /// Economy
    Economy,
    /// Mobilization
    Mobilization,
    /// Elections
    Elections,
    /// Everything else
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Self; 11] = [
        Self::Laws,
        Self::Censorship,
        Self::Police,
        Self::Lgbt,
        Self::Internet,
        Self::Education,
        Self::Culture,
        Self::Economy,
        Self::Mobilization,
        Self::Elections,
        Self::Other,
    ];

    /// The display label, which is also the serialized form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Laws => "ЗАКОНЫ",
            Self::Censorship => "ЦЕНЗУРА",
            Self::Police => "ПОЛИЦИЯ",
            Self::Lgbt => "ЛГБТ",
            Self::Internet => "ИНТЕРНЕТ",
            Self::Education => "ОБРАЗОВАНИЕ",
            Self::Culture => "КУЛЬТУРА",
            Self::Economy => "ЭКОНОМИКА",
            Self::Mobilization => "МОБИЛИЗАЦИЯ",
            Self::Elections => "ВЫБОРЫ",
            Self::Other => "ДРУГОЕ",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
