//! Tree Query
//!
//! Selector lookups over a subtree in pre-order. Invalid selector text
//! yields no results rather than an error.

use trellis_dom::{DomTree, NodeId};

use crate::{matches, parse_selector, Selector};

/// First node under `root` (inclusive) matching the selector text
pub fn find(tree: &DomTree, root: NodeId, selector: &str) -> Option<NodeId> {
    let selector = parse_query(selector)?;
    find_matching(tree, root, &selector)
}

/// Every node under `root` (inclusive) matching the selector text
pub fn find_all(tree: &DomTree, root: NodeId, selector: &str) -> Vec<NodeId> {
    match parse_query(selector) {
        Some(selector) => find_all_matching(tree, root, &selector),
        None => Vec::new(),
    }
}

pub fn find_matching(tree: &DomTree, root: NodeId, selector: &Selector) -> Option<NodeId> {
    tree.descendants(root).find(|&id| matches(selector, tree, id))
}

pub fn find_all_matching(tree: &DomTree, root: NodeId, selector: &Selector) -> Vec<NodeId> {
    tree.descendants(root)
        .filter(|&id| matches(selector, tree, id))
        .collect()
}

fn parse_query(text: &str) -> Option<Selector> {
    parse_selector(text)
        .inspect_err(|e| tracing::debug!("Query selector '{}' rejected: {}", text, e))
        .ok()
}
