//! Tree traversal
//!
//! Pre-order and ancestor iteration. Both walk with explicit state instead
//! of recursion so deep trees do not exhaust the call stack.

use crate::{DomTree, NodeId};

/// Pre-order iterator over a subtree, starting with its root
pub struct Descendants<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(tree: &'a DomTree, root: NodeId) -> Self {
        let stack = if tree.get(root).is_some() { vec![root] } else { Vec::new() };
        Self { tree, stack }
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.stack.pop()?;
        // Reversed so the first child is visited next
        self.stack.extend(self.tree.children(current).iter().rev().copied());
        Some(current)
    }
}

/// Iterator over the proper ancestors of a node, nearest first
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: Option<NodeId>,
}

impl<'a> Ancestors<'a> {
    pub(crate) fn new(tree: &'a DomTree, node: NodeId) -> Self {
        Self { tree, next: tree.parent(node) }
    }
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
