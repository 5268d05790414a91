//! The sparse attribute bag attached to each record.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{AttributeKind, AttributeValue};

/// A sparse, optional-valued set of typed fields.
///
/// At most one value per [`AttributeKind`]; lookups for absent kinds return
/// `None` rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeBag {
    values: HashMap<AttributeKind, AttributeValue>,
}

impl AttributeBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value of the same kind.
    pub fn insert(&mut self, kind: AttributeKind, value: AttributeValue) {
        self.values.insert(kind, value);
    }

    /// Builder-style insertion.
    pub fn with(mut self, kind: AttributeKind, value: impl Into<AttributeValue>) -> Self {
        self.insert(kind, value.into());
        self
    }

    /// Look up a value by kind.
    pub fn get(&self, kind: AttributeKind) -> Option<&AttributeValue> {
        self.values.get(&kind)
    }

    /// Check whether a kind is present.
    pub fn contains(&self, kind: AttributeKind) -> bool {
        self.values.contains_key(&kind)
    }

    /// Number of attributes in the bag.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all attributes.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKind, &AttributeValue)> {
        self.values.iter().map(|(kind, value)| (*kind, value))
    }
}
