//! Content Tree (arena-based allocation)

use crate::{
    Ancestors, Descendants, DomError, DomResult, Node, NodeId, NodeKindRegistry, PropertyMap,
    TEXT_TAG,
};

/// Arena-based content tree
#[derive(Debug, Default)]
pub struct DomTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl DomTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self { nodes: Vec::new(), root: None }
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    fn node_mut(&mut self, id: NodeId) -> DomResult<&mut Node> {
        self.nodes.get_mut(id.index()).ok_or(DomError::NotFound(id))
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ------------------------------------------------------------------
    // Creation
    // ------------------------------------------------------------------

    /// Create a detached node for `tag`, with the kind the registry gives it
    pub fn create_element(&mut self, tag: &str, registry: &NodeKindRegistry) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node::new(tag, registry.kind_for(tag)));
        id
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str, registry: &NodeKindRegistry) -> NodeId {
        let id = self.create_element(TEXT_TAG, registry);
        if let Some(node) = self.get_mut(id) {
            node.content = content.to_string();
        }
        id
    }

    /// Root node, if one was set
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Mark a detached node as the tree root
    pub fn set_root(&mut self, id: NodeId) -> DomResult<()> {
        let node = self.get(id).ok_or(DomError::NotFound(id))?;
        if node.parent.is_some() {
            return Err(DomError::AlreadyAttached(id));
        }
        self.root = Some(id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Ordered children (empty for unknown ids)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Zero-based position among the parent's children
    pub fn child_index(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&c| c == id)
    }

    /// Sibling immediately before this node
    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let index = self.child_index(id)?;
        let parent = self.parent(id)?;
        index.checked_sub(1).map(|i| self.children(parent)[i])
    }

    /// Proper ancestors, nearest first
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors::new(self, id)
    }

    /// Pre-order walk of the subtree rooted at `id` (inclusive)
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants::new(self, id)
    }

    // ------------------------------------------------------------------
    // Attributes, id and classes
    // ------------------------------------------------------------------

    /// Set an attribute. `id` also sets the node id; `class` adds its
    /// whitespace-separated names to the class set.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        let node = self.node_mut(id)?;
        match name {
            "id" => node.id = Some(value.to_string()),
            "class" => {
                for class in value.split_whitespace() {
                    node.add_class(class);
                }
            }
            _ => {}
        }
        node.attributes.insert(name.to_string(), value.to_string());
        Ok(())
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id).and_then(|n| n.attribute(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Remove an attribute, returning its old value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        let node = self.node_mut(id)?;
        match name {
            "id" => node.id = None,
            "class" => node.classes.clear(),
            _ => {}
        }
        Ok(node.attributes.remove(name))
    }

    pub fn set_id(&mut self, id: NodeId, value: &str) -> DomResult<()> {
        self.node_mut(id)?.id = Some(value.to_string());
        Ok(())
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) -> DomResult<()> {
        self.node_mut(id)?.add_class(class);
        Ok(())
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> DomResult<()> {
        self.node_mut(id)?.classes.retain(|c| c != class);
        Ok(())
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.get(id).is_some_and(|n| n.has_class(class))
    }

    /// Class names (empty for unknown ids)
    pub fn classes(&self, id: NodeId) -> &[String] {
        self.get(id).map(|n| n.classes.as_slice()).unwrap_or(&[])
    }

    pub fn content(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.content.as_str())
    }

    pub fn set_content(&mut self, id: NodeId, content: &str) -> DomResult<()> {
        self.node_mut(id)?.content = content.to_string();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Computed properties
    // ------------------------------------------------------------------

    pub fn property(&self, id: NodeId, name: &str) -> Option<&str> {
        self.get(id).and_then(|n| n.property(name))
    }

    pub fn properties(&self, id: NodeId) -> Option<&PropertyMap> {
        self.get(id).map(|n| &n.properties)
    }

    pub fn has_property(&self, id: NodeId, name: &str) -> bool {
        self.property(id, name).is_some()
    }

    pub fn set_property(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.node_mut(id)?.properties.insert(name.to_string(), value.to_string());
        Ok(())
    }

    /// Replace the whole property map
    pub fn set_properties(&mut self, id: NodeId, properties: PropertyMap) -> DomResult<()> {
        self.node_mut(id)?.properties = properties;
        Ok(())
    }

    pub fn remove_property(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        Ok(self.node_mut(id)?.properties.remove(name))
    }

    /// Merge properties into the node's map (add or overwrite, never delete)
    ///
    /// Afterwards, for node kinds with an inheritance list, each listed
    /// property the node still lacks is copied from its parent's computed
    /// properties.
    pub fn add_properties<I>(&mut self, id: NodeId, properties: I) -> DomResult<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let inherited = self.parent_values_for_kind(id)?;
        let node = self.node_mut(id)?;
        node.properties.extend(properties);
        for (name, value) in inherited {
            node.properties.entry(name).or_insert(value);
        }
        Ok(())
    }

    /// Parent values for the names the node's kind inherits
    fn parent_values_for_kind(&self, id: NodeId) -> DomResult<Vec<(String, String)>> {
        let node = self.get(id).ok_or(DomError::NotFound(id))?;
        let Some(parent) = node.parent.and_then(|p| self.get(p)) else {
            return Ok(Vec::new());
        };
        Ok(node
            .kind
            .inherited
            .iter()
            .filter_map(|name| {
                parent.properties.get(name).map(|value| (name.clone(), value.clone()))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;

    fn props(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_create_text_uses_registry_kind() {
        let registry = NodeKindRegistry::with_defaults();
        let mut tree = DomTree::new();
        let text = tree.create_text("hello", &registry);
        let node = tree.get(text).unwrap();

        assert_eq!(node.tag(), "text");
        assert_eq!(node.content(), "hello");
        assert!(node.kind().inherits());

        tree.set_content(text, "bye").unwrap();
        assert_eq!(tree.content(text), Some("bye"));
    }

    #[test]
    fn test_class_attribute_updates_class_set() {
        let registry = NodeKindRegistry::new();
        let mut tree = DomTree::new();
        let div = tree.create_element("div", &registry);
        tree.set_attribute(div, "class", "card  highlight card").unwrap();
        tree.set_attribute(div, "id", "main").unwrap();

        let node = tree.get(div).unwrap();
        assert_eq!(node.classes(), &["card".to_string(), "highlight".to_string()]);
        assert_eq!(node.id(), Some("main"));
        assert_eq!(tree.attribute(div, "class"), Some("card  highlight card"));

        tree.remove_attribute(div, "id").unwrap();
        assert_eq!(tree.get(div).unwrap().id(), None);
    }

    #[test]
    fn test_sibling_navigation() {
        let registry = NodeKindRegistry::new();
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul", &registry);
        let a = tree.create_element("li", &registry);
        let b = tree.create_element("li", &registry);
        tree.append_child(ul, a).unwrap();
        tree.append_child(ul, b).unwrap();

        assert_eq!(tree.first_child(ul), Some(a));
        assert_eq!(tree.last_child(ul), Some(b));
        assert_eq!(tree.child_index(b), Some(1));
        assert_eq!(tree.previous_sibling(b), Some(a));
        assert_eq!(tree.previous_sibling(a), None);
        assert_eq!(tree.child_index(ul), None);
    }

    #[test]
    fn test_add_properties_merges() {
        let registry = NodeKindRegistry::new();
        let mut tree = DomTree::new();
        let div = tree.create_element("div", &registry);
        tree.set_property(div, "width", "10").unwrap();
        tree.add_properties(div, props(&[("color", "red")])).unwrap();
        tree.add_properties(div, props(&[("color", "blue")])).unwrap();

        assert_eq!(tree.property(div, "width"), Some("10"));
        assert_eq!(tree.property(div, "color"), Some("blue"));
    }

    #[test]
    fn test_text_inherits_allow_listed_only() {
        let registry = NodeKindRegistry::with_defaults();
        let mut tree = DomTree::new();
        let item = tree.create_element("item", &registry);
        let text = tree.create_text("Option 1", &registry);
        tree.append_child(item, text).unwrap();
        tree.add_properties(
            item,
            props(&[("color", "#ff55dd"), ("margin-left", "1"), ("font-weight", "bold")]),
        )
        .unwrap();

        tree.add_properties(text, props(&[("font-weight", "normal")])).unwrap();

        assert_eq!(tree.property(text, "color"), Some("#ff55dd"));
        assert_eq!(tree.property(text, "font-weight"), Some("normal"));
        assert_eq!(tree.property(text, "margin-left"), None);
    }

    #[test]
    fn test_plain_elements_do_not_inherit() {
        let registry = NodeKindRegistry::with_defaults();
        let mut tree = DomTree::new();
        let parent = tree.create_element("div", &registry);
        let child = tree.create_element("span", &registry);
        tree.append_child(parent, child).unwrap();
        tree.set_property(parent, "color", "red").unwrap();

        tree.add_properties(child, Vec::new()).unwrap();
        assert_eq!(tree.property(child, "color"), None);
    }

    #[test]
    fn test_custom_kind_inherits() {
        let mut registry = NodeKindRegistry::new();
        registry.register("label", NodeKind::inheriting(["width"]));
        let mut tree = DomTree::new();
        let parent = tree.create_element("div", &registry);
        let label = tree.create_element("label", &registry);
        tree.append_child(parent, label).unwrap();
        tree.set_property(parent, "width", "40").unwrap();

        tree.add_properties(label, Vec::new()).unwrap();
        assert_eq!(tree.property(label, "width"), Some("40"));
    }

    #[test]
    fn test_unknown_node_errors() {
        let mut tree = DomTree::new();
        let ghost = NodeId(3);
        assert_eq!(tree.set_property(ghost, "a", "b"), Err(DomError::NotFound(ghost)));
        assert_eq!(tree.add_properties(ghost, Vec::new()), Err(DomError::NotFound(ghost)));
        assert!(tree.children(ghost).is_empty());
    }
}
