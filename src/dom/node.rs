//! Declarative element construction.
//!
//! Views are described as a tree of [`Node`] values and only then attached
//! to a [`Document`](super::Document). Text is stored verbatim and escaped
//! on serialization, so content fields can never inject markup.
//!
//! # Example
//!
//! ```
//! use conscious_choice::dom::{el, Node};
//!
//! let card: Node = el("div")
//!     .class("philosophy-card")
//!     .child(el("h3").text("Awareness"))
//!     .child(el("p").text("Notice before you act."))
//!     .into();
//! assert!(matches!(card, Node::Element(_)));
//! ```

/// A detached view node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with its own subtree
    Element(ElementNode),
    /// A run of text
    Text(String),
}

/// Builder for a detached element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    pub(crate) tag: String,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) style: Vec<(String, String)>,
    pub(crate) children: Vec<Node>,
}

/// Start building an element with the given tag name.
#[must_use]
pub fn el(tag: &str) -> ElementNode {
    ElementNode {
        tag: tag.to_ascii_lowercase(),
        id: None,
        classes: Vec::new(),
        attrs: Vec::new(),
        style: Vec::new(),
        children: Vec::new(),
    }
}

/// Create a text node.
#[must_use]
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

impl ElementNode {
    /// Set the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class (duplicates are ignored).
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        if !self.classes.iter().any(|c| c == class) {
            self.classes.push(class.to_string());
        }
        self
    }

    /// Set an attribute, replacing an earlier value with the same name.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
        self
    }

    /// Set an inline style property.
    #[must_use]
    pub fn style(mut self, property: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.style.iter_mut().find(|(p, _)| p == property) {
            Some(slot) => slot.1 = value,
            None => self.style.push((property.to_string(), value)),
        }
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append several child nodes.
    #[must_use]
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text(content.into()))
    }

    /// Tag name of the element being built.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::Text(content.to_string())
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::Text(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_parts() {
        let node = el("DIV")
            .id("card")
            .class("a")
            .class("b")
            .class("a")
            .attr("role", "button")
            .attr("role", "link")
            .style("display", "none");

        assert_eq!(node.tag(), "div");
        assert_eq!(node.id.as_deref(), Some("card"));
        assert_eq!(node.classes, vec!["a", "b"]);
        assert_eq!(node.attrs, vec![("role".to_string(), "link".to_string())]);
        assert_eq!(node.style, vec![("display".to_string(), "none".to_string())]);
    }

    #[test]
    fn test_children_and_text() {
        let node = el("ul").children(["one", "two"]).child(el("li").text("three"));
        assert_eq!(node.children.len(), 3);
        assert_eq!(node.children[0], Node::Text("one".to_string()));
        assert!(matches!(&node.children[2], Node::Element(e) if e.tag == "li"));
    }
}
