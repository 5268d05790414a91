//! The event type taxonomy - a fixed three-level tree of event types.
//!
//! The tree consists of:
//! - **node**: event type identity, levels, and the navigation algorithms
//! - **registry**: the declarative definition table and the frozen,
//!   process-wide 29-node registry
//! - **labels**: display-name resolution through an installable source

mod labels;
mod node;
mod registry;

pub use labels::*;
pub use node::*;
pub use registry::*;
