//! # Artifact Model
//!
//! The storage-engine interface crate - record identity, record kinds, typed
//! attribute values, and the sparse attribute bag attached to each record.
//! This crate is the single source of truth for record data shapes and does
//! not contain any derivation logic.
//!
//! The timeline core receives attribute values already materialized on a
//! [`Record`]; the only capability it calls back into the store for is
//! resolving the file backing a record (see [`RecordStore`]).

pub mod attributes;
pub mod records;
pub mod store;

pub use attributes::*;
pub use records::*;
pub use store::*;
