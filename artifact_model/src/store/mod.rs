//! The record-store capability consumed by the timeline core.
//!
//! Attribute values are always materialized on the record itself; the one
//! thing the core reaches back into the store for is the name of the file
//! backing a record. That lookup is synchronous, may be slow, and may fail;
//! retrying or caching it is the caller's concern.

use std::collections::HashMap;

use thiserror::Error;

use crate::records::ObjectId;

/// Errors surfaced by record-store lookups.
///
/// A failed lookup indicates an inconsistent store and must reach the
/// caller rather than being folded into an empty description fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("object {0} has no backing file")]
    MissingSourceFile(ObjectId),

    #[error("record store lookup failed: {0}")]
    LookupFailed(String),
}

/// Resolution of stored objects to the files backing them.
pub trait RecordStore {
    /// Name of the file backing the given object.
    fn source_file_name(&self, object_id: ObjectId) -> Result<String, StoreError>;
}

/// A map-backed [`RecordStore`] for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    file_names: HashMap<ObjectId, String>,
}

impl InMemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the backing file name for an object.
    pub fn with_file(mut self, object_id: ObjectId, name: impl Into<String>) -> Self {
        self.file_names.insert(object_id, name.into());
        self
    }
}

impl RecordStore for InMemoryRecordStore {
    fn source_file_name(&self, object_id: ObjectId) -> Result<String, StoreError> {
        self.file_names
            .get(&object_id)
            .cloned()
            .ok_or(StoreError::MissingSourceFile(object_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_lookup() {
        let id = ObjectId::new();
        let store = InMemoryRecordStore::new().with_file(id, "photo.jpg");

        assert_eq!(store.source_file_name(id), Ok("photo.jpg".to_string()));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let store = InMemoryRecordStore::new();
        let id = ObjectId::new();

        let err = store.source_file_name(id).unwrap_err();
        assert_eq!(err, StoreError::MissingSourceFile(id));
        assert!(err.to_string().contains("no backing file"));
    }
}
