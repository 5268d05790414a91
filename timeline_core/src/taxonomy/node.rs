//! Event type nodes and the tree navigation algorithms.

use serde::{Deserialize, Serialize};

use artifact_model::{AttributeKind, Record, RecordKind, RecordStore, StoreError};

use crate::derivation::{path_description, DescriptionStrategy};
use crate::description::EventDescription;

use super::labels;
use super::registry::registry;

/// Unique, stable identifier of an event type.
///
/// Ids are assigned once and never reused; they are the durable join key
/// between stored events and the taxonomy, and the total order key for all
/// node collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventTypeId(pub u32);

impl std::fmt::Display for EventTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Depth of an event type in the hierarchy.
///
/// There is exactly one `Root` node; children of the root are `Base`
/// categories and every other node is `Sub`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeLevel {
    Root,
    Base,
    Sub,
}

impl TypeLevel {
    /// Localized display name of this level.
    pub fn display_name(&self) -> String {
        labels::resolve(match self {
            TypeLevel::Root => "level.root",
            TypeLevel::Base => "level.base",
            TypeLevel::Sub => "level.sub",
        })
    }
}

/// How a node's descriptions come to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Grouping node: the root and the base categories.
    Category,

    /// File-system timestamp leaf. Descriptions come from the record's
    /// inherent file path (see [`path_description`]), no attribute lookup.
    FileEvent,

    /// Record-backed leaf with its own derivation strategy.
    Artifact(ArtifactEventType),
}

/// The record binding and derivation logic of an artifact-backed leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactEventType {
    pub(crate) record_kind: RecordKind,
    pub(crate) time_attribute: AttributeKind,
    pub(crate) strategy: DescriptionStrategy,
}

impl ArtifactEventType {
    /// The record kind this event type matches.
    pub fn record_kind(&self) -> RecordKind {
        self.record_kind
    }

    /// The attribute supplying a matching record's timestamp.
    pub fn time_attribute(&self) -> AttributeKind {
        self.time_attribute
    }

    /// The three-level derivation strategy.
    pub fn strategy(&self) -> DescriptionStrategy {
        self.strategy
    }

    /// Derive the three description levels from a record's attributes.
    ///
    /// Total except for the EXIF leaf's source-file lookup, whose store
    /// error propagates.
    pub fn derive(
        &self,
        record: &Record,
        store: &dyn RecordStore,
    ) -> Result<EventDescription, StoreError> {
        self.strategy.derive(record, store)
    }
}

/// One node of the fixed event type tree.
///
/// All nodes are constructed once inside the registry, frozen, and shared
/// for the process lifetime. Equality, ordering, and hashing all key on the
/// node id.
#[derive(Debug)]
pub struct EventTypeNode {
    pub(crate) id: EventTypeId,
    pub(crate) display_name: String,
    pub(crate) level: TypeLevel,
    pub(crate) kind: EventKind,
    pub(crate) parent: Option<EventTypeId>,
    pub(crate) children: Vec<EventTypeId>,
}

impl EventTypeNode {
    pub fn id(&self) -> EventTypeId {
        self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn level(&self) -> TypeLevel {
        self.level
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// The artifact binding of this node, `None` for categories and
    /// file-system leaves.
    pub fn artifact_event(&self) -> Option<&ArtifactEventType> {
        match &self.kind {
            EventKind::Artifact(artifact) => Some(artifact),
            _ => None,
        }
    }

    /// The parent node, `None` only for the root.
    pub fn super_type(&self) -> Option<&'static EventTypeNode> {
        self.parent.and_then(|id| registry().event_type(id))
    }

    /// The pre-declared children, ordered by id ascending. Empty for leaves.
    pub fn sub_types(&self) -> Vec<&'static EventTypeNode> {
        self.children
            .iter()
            .filter_map(|id| registry().event_type(*id))
            .collect()
    }

    /// Find a direct child by display name.
    pub fn sub_type(&self, name: &str) -> Option<&'static EventTypeNode> {
        self.sub_types()
            .into_iter()
            .find(|node| node.display_name == name)
    }

    /// The base-category ancestor of this node.
    ///
    /// Walks parent links until the super type is the root; the root is its
    /// own base type.
    pub fn base_type(&'static self) -> &'static EventTypeNode {
        match self.super_type() {
            None => self,
            Some(parent) if parent.level == TypeLevel::Root => self,
            Some(parent) => parent.base_type(),
        }
    }

    /// All nodes sharing this node's parent (including this node). The root
    /// is its own single sibling.
    pub fn sibling_types(&'static self) -> Vec<&'static EventTypeNode> {
        match self.super_type() {
            None => vec![self],
            Some(parent) => parent.sub_types(),
        }
    }

    /// Re-wrap three previously persisted raw description strings.
    ///
    /// Path-based nodes (file-system leaves and artifact leaves with a
    /// file-path strategy) re-segment from `full`; everything else wraps
    /// the three strings unchanged.
    pub fn parse_description(&self, full: &str, medium: &str, short: &str) -> EventDescription {
        match &self.kind {
            EventKind::FileEvent => path_description(full),
            EventKind::Artifact(artifact) => artifact.strategy.parse(full, medium, short),
            EventKind::Category => EventDescription::new(full, medium, short),
        }
    }
}

impl PartialEq for EventTypeNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EventTypeNode {}

impl PartialOrd for EventTypeNode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EventTypeNode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl std::hash::Hash for EventTypeNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for EventTypeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name)
    }
}
