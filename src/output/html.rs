//! Full-page HTML output.
//!
//! The document body is serialized by [`Document::body_html`], which
//! escapes every text node and attribute value with askama's HTML escaper,
//! so it is marked `safe` in the template. The `askama` shell adds the
//! doctype, head, title and stylesheet link; the title is escaped by the
//! template engine.

use std::io::Write;

use askama::Template;

use crate::dom::Document;

/// Stylesheet linked from every page.
pub const DEFAULT_STYLESHEET: &str = "styles.css";

/// A complete page ready to render.
#[derive(Template)]
#[template(path = "page.html")]
pub struct HtmlOutput {
    /// Document title
    pub title: String,
    /// Stylesheet href
    pub stylesheet: String,
    /// Application version
    pub version: String,
    /// Pre-escaped body markup
    pub body: String,
}

impl HtmlOutput {
    /// Wrap `doc` in the page shell.
    #[must_use]
    pub fn new(doc: &Document) -> Self {
        Self {
            title: doc.title().to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            body: doc.body_html(),
        }
    }

    /// Link a different stylesheet.
    #[must_use]
    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = href.into();
        self
    }

    /// Generate the HTML string.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn to_html(&self) -> Result<String, askama::Error> {
        self.render()
    }

    /// Write the page to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), OutputError> {
        let html = self.to_html()?;
        writer.write_all(html.as_bytes())?;
        Ok(())
    }
}

/// Errors that can occur while writing page output.
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    /// Template rendering error
    #[error("HTML template error: {0}")]
    Template(#[from] askama::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error while writing output: {0}")]
    Io(#[from] std::io::Error),
}
