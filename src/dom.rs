//! DOM operations adapter.
//!
//! Thin layer over the `dom_query` crate providing the only tree API the
//! formatting pipeline uses. The pipeline never parses or constructs HTML
//! outside this module, so swapping the underlying parser touches one file.

use crate::error::{Error, Result};

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing / Serialization ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get inner HTML content.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Replace an element's content with the given HTML fragment.
#[inline]
pub fn set_inner_html(sel: &Selection, html: &str) {
    sel.set_html(html);
}

// === Attribute Operations ===

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if an attribute exists.
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Remove an attribute.
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get all attributes of the first node as key-value pairs.
///
/// Returns an empty vector if the selection is empty or carries no attributes.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

// === Tag / Node Information ===

/// Get tag name (lowercase).
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Fallible text materialization boundary.
///
/// Returns [`Error::TreeRead`] when the selection holds no node to read from.
/// Renderer and lead search recover from this per node; callers that know the
/// selection is non-empty can use [`text_content`] instead.
pub fn node_text(sel: &Selection) -> Result<StrTendril> {
    if sel.is_empty() {
        return Err(Error::TreeRead("no node backing the selection".to_string()));
    }
    Ok(sel.text())
}

// === Tree Navigation ===

/// Get direct element children.
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

// === Querying ===

/// Query all matching descendant elements by CSS selector.
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

// === Tree Manipulation ===

/// Detach elements (and their subtrees) from the tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Remove matching descendant tags but keep their text in place.
#[inline]
pub fn strip_tags(sel: &Selection, tags: &[&str]) {
    sel.strip_elements(tags);
}

/// Deep-clone a selection into a standalone scratch document.
///
/// The clone goes through serialization, so mutations of the returned
/// document never touch the live tree.
#[must_use]
pub fn clone_fragment(sel: &Selection) -> Document {
    Document::from(outer_html(sel).to_string())
}
