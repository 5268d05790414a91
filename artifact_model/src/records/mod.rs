//! Record definitions - the artifact instances the taxonomy classifies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attributes::{AttributeBag, AttributeKind, AttributeValue};

/// Unique identifier for all stored objects (records and the files backing
/// them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub Uuid);

impl ObjectId {
    /// Create a new random object ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an object ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create a nil/empty object ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of record kinds the storage engine produces.
///
/// Each kind carries a stable integer id; ids are the durable join key
/// between stored records and the taxonomy and must never be reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    WebBookmark,
    WebCookie,
    WebHistory,
    WebDownload,
    WebSearchQuery,
    WebFormAutofill,
    WebFormAddress,
    Message,
    CallLog,
    EmailMessage,
    GpsRoute,
    GpsTrackpoint,
    RecentObject,
    InstalledProgram,
    ExifMetadata,
    DeviceAttached,
    /// Catch-all kind for pre-described timeline events (log entries,
    /// registry activity, user-created events, and the generic "other").
    TimelineEvent,
}

impl RecordKind {
    /// Stable integer id of this record kind.
    pub fn id(self) -> u32 {
        match self {
            RecordKind::WebBookmark => 1,
            RecordKind::WebCookie => 2,
            RecordKind::WebHistory => 3,
            RecordKind::WebDownload => 4,
            RecordKind::WebSearchQuery => 5,
            RecordKind::WebFormAutofill => 6,
            RecordKind::WebFormAddress => 7,
            RecordKind::Message => 8,
            RecordKind::CallLog => 9,
            RecordKind::EmailMessage => 10,
            RecordKind::GpsRoute => 11,
            RecordKind::GpsTrackpoint => 12,
            RecordKind::RecentObject => 13,
            RecordKind::InstalledProgram => 14,
            RecordKind::ExifMetadata => 15,
            RecordKind::DeviceAttached => 16,
            RecordKind::TimelineEvent => 17,
        }
    }

    /// Short machine-readable name.
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::WebBookmark => "web_bookmark",
            RecordKind::WebCookie => "web_cookie",
            RecordKind::WebHistory => "web_history",
            RecordKind::WebDownload => "web_download",
            RecordKind::WebSearchQuery => "web_search_query",
            RecordKind::WebFormAutofill => "web_form_autofill",
            RecordKind::WebFormAddress => "web_form_address",
            RecordKind::Message => "message",
            RecordKind::CallLog => "call_log",
            RecordKind::EmailMessage => "email_message",
            RecordKind::GpsRoute => "gps_route",
            RecordKind::GpsTrackpoint => "gps_trackpoint",
            RecordKind::RecentObject => "recent_object",
            RecordKind::InstalledProgram => "installed_program",
            RecordKind::ExifMetadata => "exif_metadata",
            RecordKind::DeviceAttached => "device_attached",
            RecordKind::TimelineEvent => "timeline_event",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single forensic record: an identified artifact of a known kind with a
/// sparse bag of typed attributes.
///
/// Attribute values arrive already materialized from the storage engine;
/// consumers never reach back into the store to read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub object_id: ObjectId,
    pub kind: RecordKind,
    #[serde(default)]
    pub attributes: AttributeBag,
}

impl Record {
    /// Create a new record of the given kind with a fresh object ID and no
    /// attributes.
    pub fn new(kind: RecordKind) -> Self {
        Self {
            object_id: ObjectId::new(),
            kind,
            attributes: AttributeBag::new(),
        }
    }

    /// Set the object ID.
    pub fn with_object_id(mut self, object_id: ObjectId) -> Self {
        self.object_id = object_id;
        self
    }

    /// Add an attribute to this record.
    pub fn with_attribute(mut self, kind: AttributeKind, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(kind, value.into());
        self
    }

    /// Look up an attribute value, `None` if the record does not carry it.
    pub fn attribute(&self, kind: AttributeKind) -> Option<&AttributeValue> {
        self.attributes.get(kind)
    }

    /// Check whether the record carries an attribute of the given kind.
    pub fn has_attribute(&self, kind: AttributeKind) -> bool {
        self.attributes.contains(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_ids_unique() {
        let a = ObjectId::new();
        let b = ObjectId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_record_kind_ids_distinct() {
        use std::collections::HashSet;

        let kinds = [
            RecordKind::WebBookmark,
            RecordKind::WebCookie,
            RecordKind::WebHistory,
            RecordKind::WebDownload,
            RecordKind::WebSearchQuery,
            RecordKind::WebFormAutofill,
            RecordKind::WebFormAddress,
            RecordKind::Message,
            RecordKind::CallLog,
            RecordKind::EmailMessage,
            RecordKind::GpsRoute,
            RecordKind::GpsTrackpoint,
            RecordKind::RecentObject,
            RecordKind::InstalledProgram,
            RecordKind::ExifMetadata,
            RecordKind::DeviceAttached,
            RecordKind::TimelineEvent,
        ];

        let ids: HashSet<u32> = kinds.iter().map(|k| k.id()).collect();
        assert_eq!(ids.len(), kinds.len());
    }

    #[test]
    fn test_record_builder() {
        let record = Record::new(RecordKind::CallLog)
            .with_attribute(AttributeKind::Name, "Alice")
            .with_attribute(AttributeKind::PhoneNumber, "555-1234");

        assert_eq!(record.kind, RecordKind::CallLog);
        assert!(record.has_attribute(AttributeKind::Name));
        assert!(!record.has_attribute(AttributeKind::Direction));
        assert_eq!(
            record.attribute(AttributeKind::PhoneNumber).map(|v| v.display_string()),
            Some("555-1234".to_string())
        );
    }
}
