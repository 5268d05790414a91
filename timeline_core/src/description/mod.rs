//! Event descriptions - the rendered `{full, medium, short}` triple.

use serde::{Deserialize, Serialize};

/// Granularity of a rendered event description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DescriptionLevel {
    Short,
    Medium,
    Full,
}

/// The three descriptions of one event occurrence.
///
/// Construction always populates all three fields, possibly with empty
/// strings; no field is ever unset. The field names are the persistence
/// contract with the storage layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventDescription {
    full: String,
    medium: String,
    short: String,
}

impl EventDescription {
    /// Create a description from the three levels.
    pub fn new(
        full: impl Into<String>,
        medium: impl Into<String>,
        short: impl Into<String>,
    ) -> Self {
        Self {
            full: full.into(),
            medium: medium.into(),
            short: short.into(),
        }
    }

    /// Create a description that uses the same text at every level.
    pub fn uniform(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            full: text.clone(),
            medium: text.clone(),
            short: text,
        }
    }

    /// The most detailed description.
    pub fn full(&self) -> &str {
        &self.full
    }

    /// The middle-granularity description.
    pub fn medium(&self) -> &str {
        &self.medium
    }

    /// The least detailed description.
    pub fn short(&self) -> &str {
        &self.short
    }

    /// Select a description by level.
    pub fn level(&self, level: DescriptionLevel) -> &str {
        match level {
            DescriptionLevel::Short => &self.short,
            DescriptionLevel::Medium => &self.medium,
            DescriptionLevel::Full => &self.full,
        }
    }
}
