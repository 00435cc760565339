//! Node Kinds
//!
//! Registry of per-tag node behaviour. The registry is an ordinary value
//! handed to node creation, so independent trees (and tests) can use
//! independent registries.

use std::collections::HashMap;

/// Tag given to text nodes
pub const TEXT_TAG: &str = "text";

/// Properties a text node takes from its parent when it has none of its own
pub const TEXT_INHERITED_PROPERTIES: [&str; 4] =
    ["color", "font-weight", "text-transform", "background-color"];

/// Behaviour attached to a node at creation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeKind {
    /// Property names copied from the parent's computed properties when the
    /// node's own cascade result lacks them
    pub inherited: Vec<String>,
}

impl NodeKind {
    /// Plain element: inherits nothing
    pub fn element() -> Self {
        Self::default()
    }

    /// Kind inheriting the given property names
    pub fn inheriting<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inherited: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Text node kind
    pub fn text() -> Self {
        Self::inheriting(TEXT_INHERITED_PROPERTIES)
    }

    /// Does this kind inherit anything at all
    #[inline]
    pub fn inherits(&self) -> bool {
        !self.inherited.is_empty()
    }
}

/// Tag -> node kind registry
#[derive(Debug, Clone, Default)]
pub struct NodeKindRegistry {
    kinds: HashMap<String, NodeKind>,
}

impl NodeKindRegistry {
    /// Empty registry: every tag creates a plain element
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in `text` kind
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TEXT_TAG, NodeKind::text());
        registry
    }

    /// Register (or replace) the kind used for a tag
    pub fn register(&mut self, tag: &str, kind: NodeKind) {
        tracing::trace!("Registered node kind for <{}>", tag);
        self.kinds.insert(tag.to_string(), kind);
    }

    /// Remove a registration, returning it
    pub fn unregister(&mut self, tag: &str) -> Option<NodeKind> {
        self.kinds.remove(tag)
    }

    /// Get a registered kind
    pub fn get(&self, tag: &str) -> Option<&NodeKind> {
        self.kinds.get(tag)
    }

    /// Kind for a tag, falling back to a plain element
    pub fn kind_for(&self, tag: &str) -> NodeKind {
        self.kinds.get(tag).cloned().unwrap_or_default()
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.kinds.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
