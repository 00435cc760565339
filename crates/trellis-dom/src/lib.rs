//! Trellis DOM - Content tree
//!
//! Arena-backed node tree consumed by the style resolver. Nodes own their
//! children by id; parent links are plain ids, so the tree has no ownership
//! cycles.

mod node;
mod tree;
mod kinds;
mod operations;
mod traversal;

pub use node::Node;
pub use tree::DomTree;
pub use kinds::{NodeKind, NodeKindRegistry, TEXT_TAG, TEXT_INHERITED_PROPERTIES};
pub use operations::{DomError, DomResult};
pub use traversal::{Ancestors, Descendants};

use std::collections::HashMap;
use std::fmt;

/// Computed style properties of a node (name -> value)
pub type PropertyMap = HashMap<String, String>;

/// Node identifier (index into the tree arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Id for an arena position. Lookups with ids the tree never handed
    /// out simply fail. Positions past `u32::MAX` saturate.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Position of the node in its arena
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
