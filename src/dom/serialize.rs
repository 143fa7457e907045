//! HTML serialization of a [`Document`].

use std::fmt::Write;

use askama::{Html, MarkupDisplay};

use super::{Document, NodeId, NodeKind};

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta"];

/// Escape text for use in element content or a quoted attribute value.
///
/// Uses askama's HTML escaper, the same one templates apply to `{{ }}`.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    MarkupDisplay::new_unsafe(raw, Html).to_string()
}

impl Document {
    /// Serialize the children of `<body>`.
    #[must_use]
    pub fn body_html(&self) -> String {
        self.inner_html(self.body())
    }

    /// Serialize the children of `node`.
    #[must_use]
    pub fn inner_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(node) {
            self.write_node(child, &mut out);
        }
        out
    }

    /// Serialize `node` itself, including its tags.
    #[must_use]
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        let Some(data) = self.nodes.get(node.0) else {
            return;
        };
        let element = match &data.kind {
            NodeKind::Text(content) => {
                out.push_str(&escape_html(content));
                return;
            }
            NodeKind::Element(element) => element,
        };

        out.push('<');
        out.push_str(&element.tag);
        if let Some(id) = &element.id {
            let _ = write!(out, " id=\"{}\"", escape_html(id));
        }
        if !element.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_html(&element.classes.join(" ")));
        }
        for (name, value) in &element.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        if !element.style.is_empty() {
            let style = element
                .style
                .iter()
                .map(|(p, v)| format!("{p}: {v};"))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = write!(out, " style=\"{}\"", escape_html(&style));
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&element.tag.as_str()) {
            return;
        }
        for &child in &data.children {
            self.write_node(child, out);
        }
        let _ = write!(out, "</{}>", element.tag);
    }
}
