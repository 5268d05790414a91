//! # Timeline Core
//!
//! Hierarchical event-type taxonomy with per-type, multi-granularity
//! description derivation. Heterogeneous forensic records (file-system
//! timestamps, web activity, messages, GPS points) are classified into a
//! fixed three-level tree of event types, and each occurrence is rendered
//! as three progressively detailed descriptions (full, medium, short).
//!
//! ## Core Components
//!
//! - **derivation**: string coercion, attribute extractors, and the
//!   per-leaf description strategies
//! - **description**: the immutable `{full, medium, short}` triple
//! - **taxonomy**: the event type tree, its navigation algorithms, and the
//!   fixed 29-node registry
//!
//! ## Design Philosophy
//!
//! - **Closed taxonomy**: the tree is fixed at build time; strategies and
//!   extractors are exhaustively matched sum types, and adding a leaf type
//!   is a code change, not a registration API
//! - **Total derivation**: missing attributes become empty fragments, never
//!   errors; the single external lookup (EXIF source file) is the only
//!   fallible path
//! - **Build once, freeze, share**: the registry is constructed on first
//!   access and read concurrently without synchronization

pub mod derivation;
pub mod description;
pub mod taxonomy;

pub use derivation::*;
pub use description::*;
pub use taxonomy::*;
