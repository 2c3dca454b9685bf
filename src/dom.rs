//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate: parsing, cloning, selector
//! validation, and the "visible text" rule the content mapper relies on.

// Re-export core types for external use
pub use dom_query::{Document, Matcher, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

use crate::error::{Error, Result};
use crate::patterns::WHITESPACE_NORMALIZE;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Compile a CSS selector, reporting the offending selector on failure.
pub fn compile_selector(selector: &str) -> Result<Matcher> {
    Matcher::new(selector).map_err(|_| Error::InvalidSelector(selector.to_string()))
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

/// Direct element children with the given tag.
#[must_use]
pub fn children_with_tag<'a>(sel: &Selection<'a>, tag: &str) -> Vec<Selection<'a>> {
    sel.children()
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|child| tag_name(child).as_deref() == Some(tag))
        .collect()
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Visible text of an element, approximating `innerText`.
///
/// Whitespace is collapsed. For `ul`/`ol` each direct `li` child lands on
/// its own line, so line-based heuristics see one list item per line.
#[must_use]
pub fn visible_text(sel: &Selection) -> String {
    let tag = tag_name(sel).unwrap_or_default();
    if matches!(tag.as_str(), "ul" | "ol") {
        let items: Vec<String> = children_with_tag(sel, "li")
            .iter()
            .map(|li| normalize_whitespace(&text_content(li)))
            .filter(|t| !t.is_empty())
            .collect();
        if !items.is_empty() {
            return items.join("\n");
        }
    }
    normalize_whitespace(&text_content(sel))
}

// === Tree Manipulation ===

/// Clone an element with all descendants into a new, detached Document.
///
/// Mutating the returned document never touches the source.
#[must_use]
pub fn clone_element(sel: &Selection) -> Document {
    Document::from(sel.html())
}
