//! Tree Operations
//!
//! Structural mutation: attaching children while keeping the tree acyclic
//! and parent links consistent with child lists.

use crate::{DomTree, NodeId};

/// Result type for tree operations
pub type DomResult<T> = Result<T, DomError>;

/// Tree operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node {0} not found")]
    NotFound(NodeId),

    #[error("node {0} already has a parent")]
    AlreadyAttached(NodeId),

    #[error("appending {child} to {parent} would create a cycle")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}

impl DomTree {
    /// Append `child` as the last child of `parent`
    ///
    /// The child must be detached and must not be the tree root or an
    /// ancestor of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.get(parent).ok_or(DomError::NotFound(parent))?;
        let child_node = self.get(child).ok_or(DomError::NotFound(child))?;

        if child_node.parent.is_some() {
            return Err(DomError::AlreadyAttached(child));
        }
        // A childless node can only be an ancestor of itself
        let may_contain_parent = child == parent || !child_node.children.is_empty();
        if self.root() == Some(child)
            || (may_contain_parent && self.is_inclusive_ancestor(child, parent))
        {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.get_mut(parent) {
            node.children.push(child);
        }
        Ok(child)
    }

    /// Is `ancestor` equal to `node` or one of its ancestors
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).any(|id| id == ancestor)
    }
}
