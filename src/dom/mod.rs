//! In-memory document model.
//!
//! The renderers write into a [`Document`]: an arena of element and text
//! nodes reachable from a single root, with the lookups the page contract
//! relies on (`get_element_by_id`, `query_selector`, `query_selector_all`),
//! class and attribute manipulation, inline style, keyboard focus, and a
//! per-node layout offset used by scroll handling.
//!
//! Replacing an element's content detaches the old subtree; detached nodes
//! are never returned by lookups.
//!
//! # Example
//!
//! ```
//! use conscious_choice::dom::{el, Document};
//!
//! let mut doc = Document::new();
//! let body = doc.body();
//! doc.append(body, el("p").id("footerText"));
//!
//! let footer = doc.get_element_by_id("footerText").unwrap();
//! doc.set_text(footer, "Made with care");
//! assert_eq!(doc.text_content(footer), "Made with care");
//! ```

pub mod node;
pub mod selector;
pub mod serialize;

use std::collections::HashMap;

pub use node::{el, text, ElementNode, Node};
pub use selector::{Selector, SelectorError};

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// An attached element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) style: Vec<(String, String)>,
}

impl Element {
    /// Tag name (lowercase).
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Element id, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Class list in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attribute lookup. `id` and `class` are answered from their
    /// dedicated fields.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        match name {
            "id" => self.id.as_deref(),
            "class" => None,
            _ => self
                .attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
        }
    }

    /// Inline style property lookup.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An in-memory document with a `<body>` root.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: NodeId,
    title: String,
    focused: Option<NodeId>,
    offsets: HashMap<NodeId, f64>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only `<body>`.
    #[must_use]
    pub fn new() -> Self {
        let body = NodeData {
            kind: NodeKind::Element(Element {
                tag: "body".to_string(),
                id: None,
                classes: Vec::new(),
                attrs: Vec::new(),
                style: Vec::new(),
            }),
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![body],
            root: NodeId(0),
            title: String::new(),
            focused: None,
            offsets: HashMap::new(),
        }
    }

    /// The `<body>` element.
    #[must_use]
    pub fn body(&self) -> NodeId {
        self.root
    }

    /// Document title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the document title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    // ==================== Tree Construction ====================

    fn instantiate(&mut self, node: Node, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        match node {
            Node::Text(content) => {
                self.nodes.push(NodeData {
                    kind: NodeKind::Text(content),
                    parent,
                    children: Vec::new(),
                });
            }
            Node::Element(element) => {
                self.nodes.push(NodeData {
                    kind: NodeKind::Element(Element {
                        tag: element.tag,
                        id: element.id,
                        classes: element.classes,
                        attrs: element.attrs,
                        style: element.style,
                    }),
                    parent,
                    children: Vec::new(),
                });
                for child in element.children {
                    let child_id = self.instantiate(child, Some(id));
                    if let Some(data) = self.nodes.get_mut(id.0) {
                        data.children.push(child_id);
                    }
                }
            }
        }
        id
    }

    /// Attach `node` as the last child of `parent`.
    ///
    /// A `parent` from another document leaves the new node detached.
    pub fn append(&mut self, parent: NodeId, node: impl Into<Node>) -> NodeId {
        if parent.0 >= self.nodes.len() {
            log::warn!("Node {:?} is not in this document; leaving child detached", parent);
            return self.instantiate(node.into(), None);
        }
        let id = self.instantiate(node.into(), Some(parent));
        if let Some(data) = self.nodes.get_mut(parent.0) {
            data.children.push(id);
        }
        id
    }

    /// Replace all children of `parent` with `nodes` (the `innerHTML`
    /// assignment of the page scripts). Returns the new child handles.
    pub fn set_children<I, N>(&mut self, parent: NodeId, nodes: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.detach_children(parent);
        nodes
            .into_iter()
            .map(|node| self.append(parent, node))
            .collect()
    }

    /// Replace the content of `node` with a single text node.
    pub fn set_text(&mut self, node: NodeId, content: impl Into<String>) {
        self.set_children(node, [Node::Text(content.into())]);
    }

    fn detach_children(&mut self, parent: NodeId) {
        let Some(data) = self.nodes.get_mut(parent.0) else {
            return;
        };
        let old = std::mem::take(&mut data.children);
        for child in old {
            if let Some(child_data) = self.nodes.get_mut(child.0) {
                child_data.parent = None;
            }
            if self.focused.is_some_and(|f| f == child || self.is_descendant_of(f, child)) {
                self.focused = None;
            }
        }
    }

    // ==================== Traversal ====================

    /// Parent of `node`, if attached.
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    /// Child handles of `node`, including text nodes.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Element children of `node`.
    #[must_use]
    pub fn element_children(&self, node: NodeId) -> Vec<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .filter(|&c| self.element(c).is_some())
            .collect()
    }

    /// Whether `node` is reachable from the body.
    #[must_use]
    pub fn is_attached(&self, node: NodeId) -> bool {
        node == self.root || self.is_descendant_of(node, self.root)
    }

    /// Whether `node` lies strictly inside `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// All element descendants of `scope` in document order.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            if self.element(id).is_some() {
                out.push(id);
                stack.extend(self.children(id).iter().rev().copied());
            }
        }
        out
    }

    /// Nearest inclusive ancestor of `node` matching `predicate`.
    pub fn closest(&self, node: NodeId, predicate: impl Fn(&Element) -> bool) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            if self.element(id).is_some_and(&predicate) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    // ==================== Lookup ====================

    /// Element data for `node`, or `None` for text nodes.
    #[must_use]
    pub fn element(&self, node: NodeId) -> Option<&Element> {
        match self.nodes.get(node.0).map(|n| &n.kind) {
            Some(NodeKind::Element(e)) => Some(e),
            _ => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        match self.nodes.get_mut(node.0).map(|n| &mut n.kind) {
            Some(NodeKind::Element(e)) => Some(e),
            _ => None,
        }
    }

    /// First attached element with the given id.
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if self.element(self.root).and_then(Element::id) == Some(id) {
            return Some(self.root);
        }
        self.descendants(self.root)
            .into_iter()
            .find(|&n| self.element(n).and_then(Element::id) == Some(id))
    }

    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        let Some(element) = self.element(node) else {
            return false;
        };
        if !selector.subject().matches(element) {
            return false;
        }
        let mut cursor = node;
        for compound in selector.ancestors() {
            let mut found = None;
            let mut current = self.parent(cursor);
            while let Some(id) = current {
                if self.element(id).is_some_and(|e| compound.matches(e)) {
                    found = Some(id);
                    break;
                }
                current = self.parent(id);
            }
            match found {
                Some(id) => cursor = id,
                None => return false,
            }
        }
        true
    }

    /// All elements under `scope` matching a parsed selector, in document order.
    #[must_use]
    pub fn select_within(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&n| self.matches(n, selector))
            .collect()
    }

    /// All attached elements matching `selector`, in document order.
    ///
    /// An unparsable selector matches nothing and is logged.
    #[must_use]
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        self.query_selector_all_within(self.root, selector)
    }

    /// Like [`query_selector_all`](Self::query_selector_all) but scoped to
    /// the descendants of `scope`.
    #[must_use]
    pub fn query_selector_all_within(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        match Selector::parse(selector) {
            Ok(parsed) => self.select_within(scope, &parsed),
            Err(e) => {
                log::warn!("Ignoring selector: {}", e);
                Vec::new()
            }
        }
    }

    /// First attached element matching `selector`.
    #[must_use]
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        self.query_selector_all(selector).into_iter().next()
    }

    // ==================== Content ====================

    /// Concatenated text of `node` and its descendants.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match self.nodes.get(node.0).map(|n| &n.kind) {
            Some(NodeKind::Text(t)) => out.push_str(t),
            Some(NodeKind::Element(_)) => {
                for &child in self.children(node) {
                    self.collect_text(child, out);
                }
            }
            None => {}
        }
    }

    // ==================== Attributes & Classes ====================

    /// Attribute value of an element.
    #[must_use]
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|e| e.attr(name))
    }

    /// Set an attribute on an element.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(element) = self.element_mut(node) {
            if name == "id" {
                element.id = Some(value);
                return;
            }
            match element.attrs.iter_mut().find(|(n, _)| n == name) {
                Some(slot) => slot.1 = value,
                None => element.attrs.push((name.to_string(), value)),
            }
        }
    }

    /// Whether an element carries `class`.
    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|e| e.has_class(class))
    }

    /// Add a class to an element.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.element_mut(node) {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        }
    }

    /// Remove a class from an element.
    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.element_mut(node) {
            element.classes.retain(|c| c != class);
        }
    }

    // ==================== Style ====================

    /// Inline style property of an element.
    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node).and_then(|e| e.style(property))
    }

    /// Set an inline style property.
    pub fn set_style(&mut self, node: NodeId, property: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(element) = self.element_mut(node) {
            match element.style.iter_mut().find(|(p, _)| p == property) {
                Some(slot) => slot.1 = value,
                None => element.style.push((property.to_string(), value)),
            }
        }
    }

    /// Whether an element is hidden through `display: none` on itself or
    /// an ancestor.
    #[must_use]
    pub fn is_hidden(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if self.style(id, "display") == Some("none") {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    // ==================== Focus & Layout ====================

    /// Currently focused element.
    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Move keyboard focus to an attached element.
    pub fn focus(&mut self, node: NodeId) {
        if self.element(node).is_some() && self.is_attached(node) {
            self.focused = Some(node);
        }
    }

    /// Layout offset of the element's top edge (0 when unknown).
    #[must_use]
    pub fn offset_top(&self, node: NodeId) -> f64 {
        self.offsets.get(&node).copied().unwrap_or(0.0)
    }

    /// Record the layout offset of an element's top edge.
    pub fn set_offset_top(&mut self, node: NodeId, offset: f64) {
        self.offsets.insert(node, offset);
    }
}
