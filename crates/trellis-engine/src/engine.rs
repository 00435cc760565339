//! Engine - Main entry point

use trellis_css::{
    find, find_all, matches, parse_selector, SelectorError, StyleResolver, Stylesheet,
    StylesheetError, StylesheetParser,
};
use trellis_dom::{DomError, DomTree, NodeId, NodeKindRegistry, PropertyMap};

use crate::Config;

/// The Trellis style engine
///
/// Owns the loaded stylesheet and the node-kind registry trees should be
/// built with.
#[derive(Debug)]
pub struct Engine {
    config: Config,
    registry: NodeKindRegistry,
    stylesheet: Stylesheet,
    parser: StylesheetParser,
    resolver: StyleResolver,
}

impl Engine {
    /// Create a new engine with the given configuration
    pub fn new(config: Config) -> Self {
        tracing::info!("Trellis Engine {} initialized", crate::VERSION);
        Self {
            registry: NodeKindRegistry::with_defaults(),
            stylesheet: Stylesheet::new(),
            parser: StylesheetParser::with_config(config.clone()),
            resolver: StyleResolver::with_config(config.clone()),
            config,
        }
    }

    /// Get engine configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registry to create tree nodes with
    pub fn registry(&self) -> &NodeKindRegistry {
        &self.registry
    }

    /// Mutable registry, for registering custom node kinds
    pub fn registry_mut(&mut self) -> &mut NodeKindRegistry {
        &mut self.registry
    }

    /// Rules loaded so far, in source order
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Parse stylesheet text and append its rules
    ///
    /// Returns the number of rules added. On error nothing is appended.
    pub fn load_stylesheet(&mut self, css: &str) -> Result<usize, EngineError> {
        let parsed = self.parser.parse(css)?;
        let added = parsed.len();
        self.stylesheet.extend(parsed);
        tracing::debug!("Loaded {} rules ({} total)", added, self.stylesheet.len());
        Ok(added)
    }

    /// Style `root` and everything below it
    pub fn apply(&self, tree: &mut DomTree, root: NodeId) -> Result<(), EngineError> {
        self.resolver.apply_stylesheet(tree, root, &self.stylesheet)?;
        Ok(())
    }

    /// Cascade result for a single node, without writing it to the tree
    pub fn compute(&self, tree: &DomTree, node: NodeId) -> PropertyMap {
        self.resolver.determine_properties(tree, node, &self.stylesheet)
    }

    /// Check a selector against one node
    pub fn matches(&self, tree: &DomTree, node: NodeId, selector: &str) -> Result<bool, EngineError> {
        let selector = parse_selector(selector)?;
        Ok(matches(&selector, tree, node))
    }

    /// First matching node in pre-order; invalid selectors find nothing
    pub fn find(&self, tree: &DomTree, root: NodeId, selector: &str) -> Option<NodeId> {
        find(tree, root, selector)
    }

    /// All matching nodes in pre-order; invalid selectors find nothing
    pub fn find_all(&self, tree: &DomTree, root: NodeId, selector: &str) -> Vec<NodeId> {
        find_all(tree, root, selector)
    }

    /// Indented dump of the subtree with computed properties
    pub fn dump_styled_tree(&self, tree: &DomTree, root: NodeId) -> String {
        crate::dump_styled_tree(tree, root)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Engine error
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Stylesheet error: {0}")]
    Stylesheet(#[from] StylesheetError),

    #[error("Selector error: {0}")]
    Selector(#[from] SelectorError),

    #[error("Tree error: {0}")]
    Dom(#[from] DomError),
}
