//! DOM Operations Adapter
//!
//! Provides browser-style DOM operations using the `dom_query` crate.
//! This adapter layer offers familiar function names that map to dom_query,
//! matching the query and mutation surface the overlay scripts expect
//! (find-by-selector, walk-parent, walk-children, detach-node).

// Re-export core types for external use
pub use dom_query::{Document, NodeId, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
///
/// Browser equivalent: the host-owned `document`
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get any attribute value
///
/// Browser equivalent: `el.getAttribute(name)`
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Add a class to the element's class list
///
/// Browser equivalent: `el.classList.add(name)`
#[inline]
pub fn add_class(sel: &Selection, name: &str) {
    sel.add_class(name);
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
///
/// Browser equivalent: `el.tagName` (modulo case)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Tree Navigation ===

/// Get parent element
///
/// Browser equivalent: `el.parentElement`
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Get next element sibling (skipping text nodes)
///
/// Browser equivalent: `el.nextElementSibling`
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// Get the nearest ancestor element with the given tag name
///
/// Walks parent links from (and excluding) the selection up to the tree
/// root. Browser equivalent: `el.parentElement.closest(tag)`.
#[must_use]
pub fn nearest_ancestor<'a>(sel: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    let mut current = parent(sel);
    while current.exists() {
        if tag_name(&current).as_deref() == Some(tag) {
            return Some(current);
        }
        current = parent(&current);
    }
    None
}

// === Querying ===

/// Query single element by CSS selector
///
/// Browser equivalent: `document.querySelector(selector)`
#[inline]
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select_single(selector)
}

/// Query all elements by CSS selector
///
/// Browser equivalent: `document.querySelectorAll(selector)`
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

// === Tree Manipulation ===

/// Remove elements from tree
///
/// Browser equivalent: `el.remove()`
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Append HTML content as the last child
///
/// Browser equivalent: `el.insertAdjacentHTML('beforeend', html)`
#[inline]
pub fn append_html(sel: &Selection, html: &str) {
    sel.append_html(html);
}

/// Prepend HTML content as the first child
///
/// Browser equivalent: `el.insertAdjacentHTML('afterbegin', html)`
#[inline]
pub fn prepend_html(sel: &Selection, html: &str) {
    sel.prepend_html(html);
}

/// Set HTML content
///
/// Browser equivalent: `el.innerHTML = html`
#[inline]
pub fn set_inner_html(sel: &Selection, html: &str) {
    sel.set_html(html);
}
