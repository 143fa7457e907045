//! Homepage navigation: active-section highlighting and in-page anchors.
//!
//! # Overview
//!
//! [`highlight_nav_sections`] runs on every scroll position change. It
//! scans `section[id]` elements in document order, picks the last one whose
//! top has come within [`SCROLL_ACTIVATION_OFFSET`] of the viewport top, and
//! marks exactly one `.nav-menu a` as `active`.
//!
//! Layout offsets are read from the document's offset table
//! ([`Document::set_offset_top`]); unset offsets are `0`.

use crate::dom::{Document, NodeId};

/// Distance above a section's top at which it becomes current.
pub const SCROLL_ACTIVATION_OFFSET: f64 = 200.0;

/// Id of the section that is current at `scroll_y`, if any.
#[must_use]
pub fn current_section(doc: &Document, scroll_y: f64) -> Option<String> {
    doc.query_selector_all("section[id]")
        .into_iter()
        .filter(|&section| scroll_y >= doc.offset_top(section) - SCROLL_ACTIVATION_OFFSET)
        .last()
        .and_then(|section| doc.element(section)?.id().map(str::to_string))
}

/// Recompute the active navigation link for `scroll_y`.
///
/// Clears `active` from every `.nav-menu a` and sets it on the link whose
/// `href` is `#<current section id>`. Returns the current section id.
pub fn highlight_nav_sections(doc: &mut Document, scroll_y: f64) -> Option<String> {
    let current = current_section(doc, scroll_y);
    let target = current.as_ref().map(|id| format!("#{id}"));

    for link in doc.query_selector_all(".nav-menu a") {
        doc.remove_class(link, "active");
        if target.is_some() && doc.attr(link, "href") == target.as_deref() {
            doc.add_class(link, "active");
        }
    }
    log::trace!("Scroll {scroll_y}: current section {current:?}");
    current
}

/// In-page anchor links that scroll smoothly to their target.
///
/// Links to `#` alone or to other pages (`.html`) are excluded.
#[must_use]
pub fn anchor_links(doc: &Document) -> Vec<NodeId> {
    doc.query_selector_all("a[href^=\"#\"]")
        .into_iter()
        .filter(|&link| {
            doc.attr(link, "href")
                .is_some_and(|href| href != "#" && !href.ends_with(".html"))
        })
        .collect()
}

/// Element an in-page `href` such as `#about` scrolls to.
#[must_use]
pub fn scroll_target(doc: &Document, href: &str) -> Option<NodeId> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    doc.get_element_by_id(id)
}
