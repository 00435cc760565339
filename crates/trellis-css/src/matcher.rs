//! Selector Matching
//!
//! Pure structural evaluation of a selector against a node, its ancestors
//! and its siblings.

use trellis_dom::{DomTree, Node, NodeId};

use crate::{AttributePredicate, Selector, SimpleSelector};

/// Does `selector` match `node` in `tree`
pub fn matches(selector: &Selector, tree: &DomTree, node: NodeId) -> bool {
    match selector {
        Selector::Simple(simple) => tree.get(node).is_some_and(|n| matches_simple(simple, n)),

        Selector::Descendant { ancestor, descendant } => {
            matches(descendant, tree, node)
                && tree.ancestors(node).any(|a| matches(ancestor, tree, a))
        }

        Selector::Child { parent, child } => {
            matches(child, tree, node)
                && tree.parent(node).is_some_and(|p| matches(parent, tree, p))
        }

        Selector::AdjacentSibling { first, second } => {
            matches(second, tree, node)
                && tree
                    .previous_sibling(node)
                    .is_some_and(|prev| matches(first, tree, prev))
        }

        Selector::FirstChild(inner) => {
            matches(inner, tree, node)
                && tree
                    .parent(node)
                    .is_some_and(|p| tree.first_child(p) == Some(node))
        }

        Selector::LastChild(inner) => {
            matches(inner, tree, node)
                && tree
                    .parent(node)
                    .is_some_and(|p| tree.last_child(p) == Some(node))
        }

        Selector::NthChild { inner, n } => {
            matches(inner, tree, node)
                && tree
                    .child_index(node)
                    .is_some_and(|index| index as i64 + 1 == i64::from(*n))
        }

        Selector::Not { base, negation } => {
            matches(base, tree, node) && !matches(negation, tree, node)
        }
    }
}

fn matches_simple(simple: &SimpleSelector, node: &Node) -> bool {
    if let Some(tag) = &simple.tag {
        if node.tag() != tag {
            return false;
        }
    }
    if let Some(id) = &simple.id {
        if node.id() != Some(id.as_str()) {
            return false;
        }
    }
    simple.classes.iter().all(|class| node.has_class(class))
        && simple.attributes.iter().all(|attr| matches_attribute(attr, node))
}

fn matches_attribute(predicate: &AttributePredicate, node: &Node) -> bool {
    node.attribute(&predicate.name)
        .is_some_and(|actual| predicate.operator.test(actual, &predicate.value))
}
