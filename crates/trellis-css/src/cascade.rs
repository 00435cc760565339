//! Style Cascade & Resolver
//!
//! Computes the properties of a node by:
//! 1. Matching every rule's selector against the node
//! 2. Stable-sorting the matches by specificity (source order breaks ties)
//! 3. Applying declarations in that order, then the inline style on top

use trellis_dom::{DomError, DomResult, DomTree, NodeId, PropertyMap};

use crate::{matches, parse_inline_style, Config, Rule, Specificity, Stylesheet};

/// Rules matching `node`, with their specificity, in source order
pub fn matching_rules<'a>(
    tree: &DomTree,
    node: NodeId,
    stylesheet: &'a Stylesheet,
) -> Vec<(&'a Rule, Specificity)> {
    stylesheet
        .iter()
        .filter(|rule| matches(&rule.selector, tree, node))
        .map(|rule| (rule, rule.selector.specificity()))
        .collect()
}

/// Cascade result for one node, using the default configuration
pub fn determine_properties(tree: &DomTree, node: NodeId, stylesheet: &Stylesheet) -> PropertyMap {
    StyleResolver::new().determine_properties(tree, node, stylesheet)
}

/// Apply a stylesheet to a subtree, using the default configuration
pub fn apply_stylesheet(tree: &mut DomTree, root: NodeId, stylesheet: &Stylesheet) -> DomResult<()> {
    StyleResolver::new().apply_stylesheet(tree, root, stylesheet)
}

/// Style resolver - computes properties for tree nodes
#[derive(Debug, Clone, Default)]
pub struct StyleResolver {
    config: Config,
}

impl StyleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compute the property map for a node
    pub fn determine_properties(
        &self,
        tree: &DomTree,
        node: NodeId,
        stylesheet: &Stylesheet,
    ) -> PropertyMap {
        let mut matched = matching_rules(tree, node, stylesheet);
        // sort_by_key is stable, so equal specificity keeps source order
        matched.sort_by_key(|(_, specificity)| *specificity);

        let mut properties = PropertyMap::new();
        for (rule, _) in &matched {
            for decl in &rule.declarations {
                properties.insert(decl.property.clone(), decl.value.clone());
            }
        }

        if self.config.apply_inline_styles {
            if let Some(inline) = tree.attribute(node, &self.config.inline_style_attribute) {
                for decl in parse_inline_style(inline) {
                    properties.insert(decl.property, decl.value);
                }
            }
        }

        tracing::trace!(
            "Node {} matched {} rules, {} properties",
            node,
            matched.len(),
            properties.len()
        );
        properties
    }

    /// Compute and merge properties for `root` and every node below it
    ///
    /// Nodes are visited in pre-order, so a parent's map is final before its
    /// children inherit from it.
    pub fn apply_stylesheet(
        &self,
        tree: &mut DomTree,
        root: NodeId,
        stylesheet: &Stylesheet,
    ) -> DomResult<()> {
        if tree.get(root).is_none() {
            return Err(DomError::NotFound(root));
        }

        let order: Vec<NodeId> = tree.descendants(root).collect();
        for &node in &order {
            let properties = self.determine_properties(tree, node, stylesheet);
            tree.add_properties(node, properties)?;
        }

        tracing::debug!("Styled {} nodes with {} rules", order.len(), stylesheet.len());
        Ok(())
    }
}
