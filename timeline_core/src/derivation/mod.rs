//! Description derivation - per-leaf strategies over record attributes.
//!
//! Each leaf event type owns exactly one [`DescriptionStrategy`]. A strategy
//! turns a record's sparse attribute bag into the three description levels,
//! and re-interprets previously persisted raw strings when an event is
//! reloaded from storage.

mod coerce;
mod extractor;

pub use coerce::*;
pub use extractor::*;

use artifact_model::{AttributeKind, Record, RecordStore, StoreError};

use crate::description::EventDescription;

/// The three derivation shapes of leaf event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionStrategy {
    /// One extractor per level, applied independently.
    Extractors {
        short: Extractor,
        medium: Extractor,
        full: Extractor,
    },

    /// A single path-valued attribute drives all three levels by path
    /// segmentation.
    FilePath { path_attribute: AttributeKind },

    /// One pre-formatted attribute, used verbatim at every level.
    SingleDescription { attribute: AttributeKind },
}

impl DescriptionStrategy {
    /// Derive the three description levels from a record's attributes.
    ///
    /// Missing attributes yield empty fragments. The only fallible path is
    /// the EXIF source-file extractor, whose store error propagates.
    pub fn derive(
        &self,
        record: &Record,
        store: &dyn RecordStore,
    ) -> Result<EventDescription, StoreError> {
        match self {
            DescriptionStrategy::Extractors {
                short,
                medium,
                full,
            } => Ok(EventDescription::new(
                full.extract(record, store)?,
                medium.extract(record, store)?,
                short.extract(record, store)?,
            )),
            DescriptionStrategy::FilePath { path_attribute } => {
                let path = display_string_of(record.attribute(*path_attribute));
                Ok(path_description(&path))
            }
            DescriptionStrategy::SingleDescription { attribute } => {
                let text = display_string_of(record.attribute(*attribute));
                Ok(EventDescription::uniform(text))
            }
        }
    }

    /// Re-wrap three previously persisted raw strings.
    ///
    /// Path-based leaves re-segment from `full` and ignore the supplied
    /// medium/short, so a stored full path regenerates the other levels
    /// consistently; every other shape wraps the three strings unchanged.
    pub fn parse(&self, full: &str, medium: &str, short: &str) -> EventDescription {
        match self {
            DescriptionStrategy::FilePath { .. } => path_description(full),
            _ => EventDescription::new(full, medium, short),
        }
    }
}

/// Segment a filesystem path into the three description levels.
///
/// `full` is the path unmodified, `medium` the containing directory, and
/// `short` the final segment. A path with no separator keeps itself as
/// `short` with an empty `medium`; an empty path yields all three empty.
pub fn path_description(path: &str) -> EventDescription {
    match path.rfind('/') {
        Some(split) => EventDescription::new(path, &path[..split], &path[split + 1..]),
        None => EventDescription::new(path, "", path),
    }
}
