//! Content Node
//!
//! A node carries the structural data selectors look at (tag, id, classes,
//! attributes) plus the computed property map the cascade writes into.

use std::collections::HashMap;

use crate::{NodeId, NodeKind, PropertyMap};

/// Tree node
#[derive(Debug, Clone)]
pub struct Node {
    /// Tag name (empty only for synthetic nodes)
    pub(crate) tag: String,
    /// Cached id attribute
    pub(crate) id: Option<String>,
    /// Class names, without duplicates, in insertion order
    pub(crate) classes: Vec<String>,
    /// Raw attributes
    pub(crate) attributes: HashMap<String, String>,
    /// Computed style properties
    pub(crate) properties: PropertyMap,
    /// Text content (text nodes)
    pub(crate) content: String,
    /// Behaviour looked up from the registry at creation time
    pub(crate) kind: NodeKind,
    /// Parent node (None for a root or detached node)
    pub(crate) parent: Option<NodeId>,
    /// Ordered children
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(tag: &str, kind: NodeKind) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attributes: HashMap::new(),
            properties: PropertyMap::new(),
            content: String::new(),
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[inline]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Check class membership
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    #[inline]
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// Get an attribute value
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[inline]
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Get a computed property value
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }
}
