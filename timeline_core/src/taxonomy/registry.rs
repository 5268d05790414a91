//! The fixed event type registry.
//!
//! The tree is declared as data: one table row per node, children derived
//! by grouping on the parent id. The registry is built on first access,
//! checked for structural consistency, then frozen and shared for the
//! process lifetime.

use std::sync::OnceLock;

use artifact_model::{AttributeKind, RecordKind};

use crate::derivation::{DescriptionStrategy, Extractor};

use super::labels;
use super::node::{ArtifactEventType, EventKind, EventTypeId, EventTypeNode, TypeLevel};

/// Stable ids of the 29 event types. Assigned once, never reused.
pub mod ids {
    use super::EventTypeId;

    pub const ROOT: EventTypeId = EventTypeId(0);
    pub const FILE_SYSTEM: EventTypeId = EventTypeId(1);
    pub const WEB_ACTIVITY: EventTypeId = EventTypeId(2);
    pub const MISC_TYPES: EventTypeId = EventTypeId(3);
    pub const FILE_MODIFIED: EventTypeId = EventTypeId(4);
    pub const FILE_ACCESSED: EventTypeId = EventTypeId(5);
    pub const FILE_CREATED: EventTypeId = EventTypeId(6);
    pub const FILE_CHANGED: EventTypeId = EventTypeId(7);
    pub const WEB_DOWNLOADS: EventTypeId = EventTypeId(8);
    pub const WEB_COOKIES: EventTypeId = EventTypeId(9);
    pub const WEB_BOOKMARKS: EventTypeId = EventTypeId(10);
    pub const WEB_HISTORY: EventTypeId = EventTypeId(11);
    pub const WEB_SEARCHES: EventTypeId = EventTypeId(12);
    pub const MESSAGES: EventTypeId = EventTypeId(13);
    pub const GPS_ROUTES: EventTypeId = EventTypeId(14);
    pub const GPS_TRACKPOINTS: EventTypeId = EventTypeId(15);
    pub const CALLS: EventTypeId = EventTypeId(16);
    pub const EMAIL: EventTypeId = EventTypeId(17);
    pub const RECENT_DOCUMENTS: EventTypeId = EventTypeId(18);
    pub const INSTALLED_PROGRAMS: EventTypeId = EventTypeId(19);
    pub const EXIF: EventTypeId = EventTypeId(20);
    pub const DEVICES_ATTACHED: EventTypeId = EventTypeId(21);
    pub const CUSTOM_TYPES: EventTypeId = EventTypeId(22);
    pub const OTHER: EventTypeId = EventTypeId(23);
    pub const LOG_ENTRY: EventTypeId = EventTypeId(24);
    pub const REGISTRY: EventTypeId = EventTypeId(25);
    pub const USER_CREATED: EventTypeId = EventTypeId(26);
    pub const WEB_FORM_AUTOFILL: EventTypeId = EventTypeId(27);
    pub const WEB_FORM_ADDRESSES: EventTypeId = EventTypeId(28);
}

/// One row of the definition table.
struct NodeDef {
    id: EventTypeId,
    label_key: &'static str,
    level: TypeLevel,
    parent: Option<EventTypeId>,
    kind: EventKind,
}

const fn artifact(
    record_kind: RecordKind,
    time_attribute: AttributeKind,
    strategy: DescriptionStrategy,
) -> EventKind {
    EventKind::Artifact(ArtifactEventType {
        record_kind,
        time_attribute,
        strategy,
    })
}

const fn single(
    record_kind: RecordKind,
    time_attribute: AttributeKind,
    attribute: AttributeKind,
) -> EventKind {
    artifact(
        record_kind,
        time_attribute,
        DescriptionStrategy::SingleDescription { attribute },
    )
}

const fn extractors(
    record_kind: RecordKind,
    time_attribute: AttributeKind,
    short: Extractor,
    medium: Extractor,
    full: Extractor,
) -> EventKind {
    artifact(
        record_kind,
        time_attribute,
        DescriptionStrategy::Extractors {
            short,
            medium,
            full,
        },
    )
}

static DEFINITIONS: &[NodeDef] = &[
    NodeDef {
        id: ids::ROOT,
        label_key: "root",
        level: TypeLevel::Root,
        parent: None,
        kind: EventKind::Category,
    },
    NodeDef {
        id: ids::FILE_SYSTEM,
        label_key: "file_system",
        level: TypeLevel::Base,
        parent: Some(ids::ROOT),
        kind: EventKind::Category,
    },
    NodeDef {
        id: ids::WEB_ACTIVITY,
        label_key: "web_activity",
        level: TypeLevel::Base,
        parent: Some(ids::ROOT),
        kind: EventKind::Category,
    },
    NodeDef {
        id: ids::MISC_TYPES,
        label_key: "misc_types",
        level: TypeLevel::Base,
        parent: Some(ids::ROOT),
        kind: EventKind::Category,
    },
    NodeDef {
        id: ids::FILE_MODIFIED,
        label_key: "file_system.modified",
        level: TypeLevel::Sub,
        parent: Some(ids::FILE_SYSTEM),
        kind: EventKind::FileEvent,
    },
    NodeDef {
        id: ids::FILE_ACCESSED,
        label_key: "file_system.accessed",
        level: TypeLevel::Sub,
        parent: Some(ids::FILE_SYSTEM),
        kind: EventKind::FileEvent,
    },
    NodeDef {
        id: ids::FILE_CREATED,
        label_key: "file_system.created",
        level: TypeLevel::Sub,
        parent: Some(ids::FILE_SYSTEM),
        kind: EventKind::FileEvent,
    },
    NodeDef {
        id: ids::FILE_CHANGED,
        label_key: "file_system.changed",
        level: TypeLevel::Sub,
        parent: Some(ids::FILE_SYSTEM),
        kind: EventKind::FileEvent,
    },
    NodeDef {
        id: ids::WEB_DOWNLOADS,
        label_key: "web.downloads",
        level: TypeLevel::Sub,
        parent: Some(ids::WEB_ACTIVITY),
        kind: single(
            RecordKind::WebDownload,
            AttributeKind::DatetimeAccessed,
            AttributeKind::Url,
        ),
    },
    NodeDef {
        id: ids::WEB_COOKIES,
        label_key: "web.cookies",
        level: TypeLevel::Sub,
        parent: Some(ids::WEB_ACTIVITY),
        kind: single(
            RecordKind::WebCookie,
            AttributeKind::Datetime,
            AttributeKind::Url,
        ),
    },
    NodeDef {
        id: ids::WEB_BOOKMARKS,
        label_key: "web.bookmarks",
        level: TypeLevel::Sub,
        parent: Some(ids::WEB_ACTIVITY),
        kind: single(
            RecordKind::WebBookmark,
            AttributeKind::DatetimeCreated,
            AttributeKind::Url,
        ),
    },
    NodeDef {
        id: ids::WEB_HISTORY,
        label_key: "web.history",
        level: TypeLevel::Sub,
        parent: Some(ids::WEB_ACTIVITY),
        kind: single(
            RecordKind::WebHistory,
            AttributeKind::DatetimeAccessed,
            AttributeKind::Url,
        ),
    },
    NodeDef {
        id: ids::WEB_SEARCHES,
        label_key: "web.searches",
        level: TypeLevel::Sub,
        parent: Some(ids::WEB_ACTIVITY),
        kind: single(
            RecordKind::WebSearchQuery,
            AttributeKind::DatetimeAccessed,
            AttributeKind::Domain,
        ),
    },
    NodeDef {
        id: ids::MESSAGES,
        label_key: "misc.messages",
        level: TypeLevel::Sub,
        parent: Some(ids::MISC_TYPES),
        kind: extractors(
            RecordKind::Message,
            AttributeKind::Datetime,
            Extractor::Attribute(AttributeKind::MessageType),
            Extractor::MessageSummary,
            Extractor::Attribute(AttributeKind::Text),
        ),
    },
    NodeDef {
        id: ids::GPS_ROUTES,
        label_key: "misc.gps_routes",
        level: TypeLevel::Sub,
        parent: Some(ids::MISC_TYPES),
        kind: extractors(
            RecordKind::GpsRoute,
            AttributeKind::Datetime,
            Extractor::Attribute(AttributeKind::ProgramName),
            Extractor::Attribute(AttributeKind::Location),
            Extractor::RouteEndpoints,
        ),
    },
    NodeDef {
        id: ids::GPS_TRACKPOINTS,
        label_key: "misc.gps_trackpoints",
        level: TypeLevel::Sub,
        parent: Some(ids::MISC_TYPES),
        kind: extractors(
            RecordKind::GpsTrackpoint,
            AttributeKind::Datetime,
            Extractor::Attribute(AttributeKind::ProgramName),
            Extractor::Empty,
            Extractor::TrackpointCoordinates,
        ),
    },
    NodeDef {
        id: ids::CALLS,
        label_key: "misc.calls",
        level: TypeLevel::Sub,
        parent: Some(ids::MISC_TYPES),
        kind: extractors(
            RecordKind::CallLog,
            AttributeKind::DatetimeStart,
            Extractor::Attribute(AttributeKind::Name),
            Extractor::Attribute(AttributeKind::PhoneNumber),
            Extractor::Attribute(AttributeKind::Direction),
        ),
    },
    NodeDef {
        id: ids::EMAIL,
        label_key: "misc.email",
        level: TypeLevel::Sub,
        parent: Some(ids::MISC_TYPES),
        kind: extractors(
            RecordKind::EmailMessage,
            AttributeKind::DatetimeSent,
            Extractor::Attribute(AttributeKind::Subject),
            Extractor::Attribute(AttributeKind::EmailContentPlain),
            Extractor::EmailHeader,
        ),
    },
    NodeDef {
        id: ids::RECENT_DOCUMENTS,
        label_key: "misc.recent_documents",
        level: TypeLevel::Sub,
        parent: Some(ids::MISC_TYPES),
        kind: artifact(
            RecordKind::RecentObject,
            AttributeKind::Datetime,
            DescriptionStrategy::FilePath {
                path_attribute: AttributeKind::Path,
            },
        ),
    },
    NodeDef {
        id: ids::INSTALLED_PROGRAMS,
        label_key: "misc.installed_programs",
        level: TypeLevel::Sub,
        parent: Some(ids::MISC_TYPES),
        kind: extractors(
            RecordKind::InstalledProgram,
            AttributeKind::Datetime,
            Extractor::Empty,
            Extractor::Empty,
            Extractor::Attribute(AttributeKind::ProgramName),
        ),
    },
    NodeDef {
        id: ids::EXIF,
        label_key: "misc.exif",
        level: TypeLevel::Sub,
        parent: Some(ids::MISC_TYPES),
        kind: extractors(
            RecordKind::ExifMetadata,
            AttributeKind::DatetimeCreated,
            Extractor::Attribute(AttributeKind::DeviceMake),
            Extractor::Attribute(AttributeKind::DeviceModel),
            Extractor::SourceFileName,
        ),
    },
    NodeDef {
        id: ids::DEVICES_ATTACHED,
        label_key: "misc.devices_attached",
        level: TypeLevel::Sub,
        parent: Some(ids::MISC_TYPES),
        kind: extractors(
            RecordKind::DeviceAttached,
            AttributeKind::Datetime,
            Extractor::Attribute(AttributeKind::DeviceMake),
            Extractor::Attribute(AttributeKind::DeviceModel),
            Extractor::Attribute(AttributeKind::DeviceId),
        ),
    },
    NodeDef {
        id: ids::CUSTOM_TYPES,
        label_key: "custom_types",
        level: TypeLevel::Base,
        parent: Some(ids::ROOT),
        kind: EventKind::Category,
    },
    NodeDef {
        id: ids::OTHER,
        label_key: "custom.other",
        level: TypeLevel::Sub,
        parent: Some(ids::CUSTOM_TYPES),
        kind: single(
            RecordKind::TimelineEvent,
            AttributeKind::Datetime,
            AttributeKind::Description,
        ),
    },
    NodeDef {
        id: ids::LOG_ENTRY,
        label_key: "misc.log_entry",
        level: TypeLevel::Sub,
        parent: Some(ids::MISC_TYPES),
        kind: single(
            RecordKind::TimelineEvent,
            AttributeKind::Datetime,
            AttributeKind::Description,
        ),
    },
    NodeDef {
        id: ids::REGISTRY,
        label_key: "misc.registry",
        level: TypeLevel::Sub,
        parent: Some(ids::MISC_TYPES),
        kind: single(
            RecordKind::TimelineEvent,
            AttributeKind::Datetime,
            AttributeKind::Description,
        ),
    },
    NodeDef {
        id: ids::USER_CREATED,
        label_key: "custom.user_created",
        level: TypeLevel::Sub,
        parent: Some(ids::CUSTOM_TYPES),
        kind: single(
            RecordKind::TimelineEvent,
            AttributeKind::Datetime,
            AttributeKind::Description,
        ),
    },
    NodeDef {
        id: ids::WEB_FORM_AUTOFILL,
        label_key: "web.form_autofill",
        level: TypeLevel::Sub,
        parent: Some(ids::WEB_ACTIVITY),
        kind: extractors(
            RecordKind::WebFormAutofill,
            AttributeKind::DatetimeAccessed,
            Extractor::Empty,
            Extractor::Empty,
            Extractor::AutofillEntry,
        ),
    },
    NodeDef {
        id: ids::WEB_FORM_ADDRESSES,
        label_key: "web.form_addresses",
        level: TypeLevel::Sub,
        parent: Some(ids::WEB_ACTIVITY),
        kind: single(
            RecordKind::WebFormAddress,
            AttributeKind::DatetimeAccessed,
            AttributeKind::EmailAddress,
        ),
    },
];

/// The frozen set of all event type nodes.
pub struct TypeRegistry {
    nodes: Vec<EventTypeNode>,
}

static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// The process-wide registry, built on first access and then immutable.
pub fn registry() -> &'static TypeRegistry {
    REGISTRY.get_or_init(TypeRegistry::build)
}

impl TypeRegistry {
    fn build() -> Self {
        let mut nodes: Vec<EventTypeNode> = DEFINITIONS
            .iter()
            .map(|def| {
                let mut children: Vec<EventTypeId> = DEFINITIONS
                    .iter()
                    .filter(|child| child.parent == Some(def.id))
                    .map(|child| child.id)
                    .collect();
                children.sort();

                EventTypeNode {
                    id: def.id,
                    display_name: labels::resolve(def.label_key),
                    level: def.level,
                    kind: def.kind,
                    parent: def.parent,
                    children,
                }
            })
            .collect();
        nodes.sort_by_key(|node| node.id);

        let registry = Self { nodes };
        registry.check_consistency();
        registry
    }

    /// Initialization-time structural check. A violation here is a
    /// programming error in the definition table, not a runtime condition.
    fn check_consistency(&self) {
        for pair in self.nodes.windows(2) {
            assert_ne!(pair[0].id, pair[1].id, "duplicate event type id {}", pair[0].id);
        }

        let roots: Vec<_> = self.nodes.iter().filter(|n| n.parent.is_none()).collect();
        assert_eq!(roots.len(), 1, "expected exactly one parentless node");
        let root = roots[0];
        assert_eq!(root.level, TypeLevel::Root, "parentless node must be the root");

        for node in &self.nodes {
            if let Some(parent_id) = node.parent {
                let parent = self
                    .event_type(parent_id)
                    .unwrap_or_else(|| panic!("node {} has unknown parent {}", node.id, parent_id));
                assert!(
                    parent.children.contains(&node.id),
                    "node {} not listed under its parent {}",
                    node.id,
                    parent_id
                );
                let expected = if parent_id == root.id {
                    TypeLevel::Base
                } else {
                    TypeLevel::Sub
                };
                assert_eq!(node.level, expected, "node {} is at the wrong level", node.id);
            }
            for child_id in &node.children {
                let child = self
                    .event_type(*child_id)
                    .unwrap_or_else(|| panic!("node {} lists unknown child {}", node.id, child_id));
                assert_eq!(
                    child.parent,
                    Some(node.id),
                    "child {} does not point back to {}",
                    child_id,
                    node.id
                );
            }
            match node.level {
                TypeLevel::Sub => assert!(
                    !matches!(node.kind, EventKind::Category),
                    "leaf {} has no description logic",
                    node.id
                ),
                _ => assert!(
                    matches!(node.kind, EventKind::Category),
                    "category {} must not carry description logic",
                    node.id
                ),
            }
        }

        // Walking the tree from the root must visit every node exactly once.
        let mut visited = vec![root.id];
        let mut frontier = vec![root];
        while let Some(node) = frontier.pop() {
            for child_id in &node.children {
                assert!(!visited.contains(child_id), "cycle through node {}", child_id);
                visited.push(*child_id);
                if let Some(child) = self.event_type(*child_id) {
                    frontier.push(child);
                }
            }
        }
        assert_eq!(visited.len(), self.nodes.len(), "unreachable nodes in the tree");
    }

    /// Look up a node by id.
    pub fn event_type(&self, id: EventTypeId) -> Option<&EventTypeNode> {
        self.nodes
            .binary_search_by_key(&id, |node| node.id)
            .ok()
            .map(|index| &self.nodes[index])
    }

    /// The root of the tree.
    pub fn root(&self) -> &EventTypeNode {
        self.nodes
            .iter()
            .find(|node| node.parent.is_none())
            .expect("consistency check guarantees a root")
    }

    fn children_of(&self, id: EventTypeId) -> Vec<&EventTypeNode> {
        self.event_type(id)
            .map(|node| {
                node.children
                    .iter()
                    .filter_map(|child| self.event_type(*child))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The base categories directly under the root.
    pub fn base_types(&self) -> Vec<&EventTypeNode> {
        self.children_of(self.root().id)
    }

    /// The file-system timestamp leaves.
    pub fn file_system_types(&self) -> Vec<&EventTypeNode> {
        self.children_of(ids::FILE_SYSTEM)
    }

    /// The web activity leaves.
    pub fn web_activity_types(&self) -> Vec<&EventTypeNode> {
        self.children_of(ids::WEB_ACTIVITY)
    }

    /// The miscellaneous leaves.
    pub fn misc_types(&self) -> Vec<&EventTypeNode> {
        self.children_of(ids::MISC_TYPES)
    }

    /// The custom/catch-all leaves.
    pub fn custom_types(&self) -> Vec<&EventTypeNode> {
        self.children_of(ids::CUSTOM_TYPES)
    }

    /// Iterate over every node, ordered by id.
    pub fn all_types(&self) -> impl Iterator<Item = &EventTypeNode> {
        self.nodes.iter()
    }

    /// Number of nodes in the registry.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Event types matching a record kind.
    ///
    /// Not unique for [`RecordKind::TimelineEvent`], whose records carry
    /// their event type explicitly and may map to any of the catch-all
    /// leaves.
    pub fn types_for_record_kind(&self, kind: RecordKind) -> Vec<&EventTypeNode> {
        self.nodes
            .iter()
            .filter(|node| {
                node.artifact_event()
                    .map(|artifact| artifact.record_kind() == kind)
                    .unwrap_or(false)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use artifact_model::{InMemoryRecordStore, ObjectId, Record, StoreError};

    use super::*;

    #[test]
    fn test_registry_has_29_nodes() {
        assert_eq!(registry().len(), 29);
        assert!(!registry().is_empty());
    }

    #[test]
    fn test_category_accessor_sizes() {
        let registry = registry();
        assert_eq!(registry.base_types().len(), 4);
        assert_eq!(registry.file_system_types().len(), 4);
        assert_eq!(registry.web_activity_types().len(), 7);
        assert_eq!(registry.misc_types().len(), 11);
        assert_eq!(registry.custom_types().len(), 2);
    }

    #[test]
    fn test_all_ids_distinct() {
        use std::collections::HashSet;

        let ids: HashSet<EventTypeId> = registry().all_types().map(|n| n.id()).collect();
        assert_eq!(ids.len(), 29);
    }

    #[test]
    fn test_every_node_is_in_its_parents_children() {
        for node in registry().all_types() {
            let Some(parent) = node.super_type() else {
                continue;
            };
            assert!(parent.sub_types().contains(&node));
            assert_eq!(node.sibling_types(), parent.sub_types());
        }
    }

    #[test]
    fn test_base_type_fixed_point() {
        let registry = registry();
        let root = registry.root();
        assert_eq!(root.base_type(), root);

        for base in registry.base_types() {
            assert_eq!(base.base_type(), base);
        }

        for node in registry.all_types() {
            if node.level() == TypeLevel::Sub {
                assert_eq!(Some(node.base_type()), node.super_type());
                assert_eq!(node.base_type().level(), TypeLevel::Base);
            }
        }
    }

    #[test]
    fn test_root_is_its_own_sibling_set() {
        let root = registry().root();
        assert_eq!(root.sibling_types(), vec![root]);
    }

    #[test]
    fn test_children_ordered_by_id() {
        for node in registry().all_types() {
            let ids: Vec<EventTypeId> = node.sub_types().iter().map(|n| n.id()).collect();
            let mut sorted = ids.clone();
            sorted.sort();
            assert_eq!(ids, sorted);
        }
    }

    #[test]
    fn test_node_ordering_matches_id_ordering() {
        let mut nodes: Vec<_> = registry().misc_types();
        nodes.reverse();
        nodes.sort();

        let ids: Vec<u32> = nodes.iter().map(|n| n.id().0).collect();
        let mut expected = ids.clone();
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_sub_type_lookup_by_name() {
        let registry = registry();
        let file_system = registry
            .event_type(ids::FILE_SYSTEM)
            .expect("file system category");

        let modified = file_system.sub_type("File Modified").expect("leaf by name");
        assert_eq!(modified.id(), ids::FILE_MODIFIED);
        assert!(file_system.sub_type("No Such Leaf").is_none());
    }

    #[test]
    fn test_display_names_resolved() {
        let registry = registry();
        assert_eq!(registry.root().display_name(), "Event Types");
        let routes = registry.event_type(ids::GPS_ROUTES).expect("routes leaf");
        assert_eq!(routes.display_name(), "GPS Routes");
        assert_eq!(routes.to_string(), "GPS Routes");
    }

    #[test]
    fn test_level_display_names() {
        assert_eq!(TypeLevel::Root.display_name(), "Root Type");
        assert_eq!(TypeLevel::Sub.display_name(), "Sub Type");
    }

    #[test]
    fn test_artifact_bindings() {
        let registry = registry();

        let calls = registry.event_type(ids::CALLS).expect("calls leaf");
        let artifact = calls.artifact_event().expect("calls are record-backed");
        assert_eq!(artifact.record_kind(), RecordKind::CallLog);
        assert_eq!(artifact.time_attribute(), AttributeKind::DatetimeStart);

        let modified = registry.event_type(ids::FILE_MODIFIED).expect("file leaf");
        assert!(modified.artifact_event().is_none());
    }

    #[test]
    fn test_types_for_record_kind() {
        let registry = registry();

        let history = registry.types_for_record_kind(RecordKind::WebHistory);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id(), ids::WEB_HISTORY);

        let catch_alls: Vec<EventTypeId> = registry
            .types_for_record_kind(RecordKind::TimelineEvent)
            .iter()
            .map(|n| n.id())
            .collect();
        assert_eq!(
            catch_alls,
            vec![ids::OTHER, ids::LOG_ENTRY, ids::REGISTRY, ids::USER_CREATED]
        );
    }

    #[test]
    fn test_message_derivation_through_registry() {
        let registry = registry();
        let messages = registry.event_type(ids::MESSAGES).expect("messages leaf");
        let artifact = messages.artifact_event().expect("record-backed");

        let record = Record::new(RecordKind::Message)
            .with_attribute(AttributeKind::Direction, "Incoming")
            .with_attribute(AttributeKind::ReadStatus, "Read")
            .with_attribute(AttributeKind::PhoneNumber, "555-1234")
            .with_attribute(AttributeKind::Subject, "hi")
            .with_attribute(AttributeKind::MessageType, "SMS Message")
            .with_attribute(AttributeKind::Text, "hi, are you around?");

        let desc = artifact
            .derive(&record, &InMemoryRecordStore::new())
            .unwrap();
        assert_eq!(desc.medium(), "Incoming Read from 555-1234 hi");
        assert_eq!(desc.short(), "SMS Message");
        assert_eq!(desc.full(), "hi, are you around?");
    }

    #[test]
    fn test_exif_derivation_uses_the_store() {
        let registry = registry();
        let exif = registry.event_type(ids::EXIF).expect("exif leaf");
        let artifact = exif.artifact_event().expect("record-backed");

        let object_id = ObjectId::new();
        let record = Record::new(RecordKind::ExifMetadata)
            .with_object_id(object_id)
            .with_attribute(AttributeKind::DeviceMake, "Canon")
            .with_attribute(AttributeKind::DeviceModel, "EOS 5D");

        let store = InMemoryRecordStore::new().with_file(object_id, "IMG_0042.jpg");
        let desc = artifact.derive(&record, &store).unwrap();
        assert_eq!(desc.short(), "Canon");
        assert_eq!(desc.medium(), "EOS 5D");
        assert_eq!(desc.full(), "IMG_0042.jpg");

        // An inconsistent store surfaces as an error, not an empty fragment.
        let err = artifact
            .derive(&record, &InMemoryRecordStore::new())
            .unwrap_err();
        assert_eq!(err, StoreError::MissingSourceFile(object_id));
    }

    #[test]
    fn test_parse_description_identity_on_plain_leaves() {
        let calls = registry().event_type(ids::CALLS).expect("calls leaf");
        let desc = calls.parse_description("full", "med", "short");

        assert_eq!(desc.full(), "full");
        assert_eq!(desc.medium(), "med");
        assert_eq!(desc.short(), "short");
    }

    #[test]
    fn test_parse_description_resegments_on_path_leaves() {
        let registry = registry();

        for id in [ids::FILE_MODIFIED, ids::RECENT_DOCUMENTS] {
            let leaf = registry.event_type(id).expect("path-based leaf");
            let desc = leaf.parse_description("/a/b/c.txt", "ignored", "ignored");
            assert_eq!(desc.full(), "/a/b/c.txt");
            assert_eq!(desc.medium(), "/a/b");
            assert_eq!(desc.short(), "c.txt");
        }
    }

    #[test]
    fn test_single_description_leaf_uniform() {
        let other = registry().event_type(ids::OTHER).expect("catch-all leaf");
        let artifact = other.artifact_event().expect("record-backed");

        let record = Record::new(RecordKind::TimelineEvent)
            .with_attribute(AttributeKind::Description, "hello");

        let desc = artifact
            .derive(&record, &InMemoryRecordStore::new())
            .unwrap();
        assert_eq!(desc.full(), "hello");
        assert_eq!(desc.medium(), "hello");
        assert_eq!(desc.short(), "hello");
    }

    #[test]
    fn test_registry_is_shared() {
        let a = registry();
        let b = registry();
        assert!(std::ptr::eq(a, b));
    }
}
