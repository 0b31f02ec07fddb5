//! DOM operations adapter.
//!
//! A thin layer over the `dom_query` crate exposing the handful of tree
//! operations the scrub passes need. Attribute access is total: a missing or
//! malformed attribute reads as absent rather than failing.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse HTML text into a document.
///
/// Parsing is lenient: malformed markup (unclosed tags, invalid nesting,
/// broken attributes) still yields a tree, with implicit structure inserted
/// as needed. There is no failure path.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Serialize a document back to markup text.
#[inline]
#[must_use]
pub fn serialize(doc: &Document) -> String {
    doc.html().to_string()
}

// === Attribute Operations ===

/// Get any attribute value, `None` when absent.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value.
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Get element ID attribute.
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

// === Tag/Node Information ===

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

/// Get outer HTML content.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Tree Manipulation ===

/// Remove the selected elements and their descendants from the tree.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_select() {
        let doc = parse(r#"<div id="main">content</div>"#);
        let div = doc.select("div");

        assert_eq!(id(&div), Some("main".to_string()));
        assert_eq!(tag_name(&div), Some("div".to_string()));
    }

    #[test]
    fn missing_attributes_read_as_absent() {
        let doc = parse("<div>no attributes</div>");
        let div = doc.select("div");

        assert_eq!(id(&div), None);
        assert_eq!(get_attribute(&div, "src"), None);
    }

    #[test]
    fn remove_detaches_subtree() {
        let doc = parse(r#"<div><span id="gone"><b>deep</b></span><p>kept</p></div>"#);

        remove(&doc.select("#gone"));

        assert!(doc.select("#gone").is_empty());
        assert!(doc.select("b").is_empty());
        assert!(doc.select("p").exists());
    }

    #[test]
    fn attribute_assignment_round_trips() {
        let doc = parse(r#"<a href="/old">text</a>"#);
        let link = doc.select("a");

        set_attribute(&link, "href", "/new");

        assert_eq!(get_attribute(&link, "href"), Some("/new".to_string()));
    }

    #[test]
    fn serialize_reproduces_content() {
        let doc = parse("<p>hello <b>world</b></p>");
        let html = serialize(&doc);

        assert!(html.contains("<p>hello <b>world</b></p>"));
    }

    #[test]
    fn operations_on_empty_selection_are_noops() {
        let doc = parse("<div>content</div>");
        let empty = doc.select("iframe");

        remove(&empty);
        set_attribute(&empty, "src", "x");

        assert_eq!(text_content(&empty), "".into());
        assert!(outer_html(&empty).is_empty());
    }
}
