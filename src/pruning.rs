//! Structural removal and rewrite passes over the parsed tree.
//!
//! Four sequential removal passes drop the elements the archive service
//! injects, then a rewrite pass strips leftover Wayback prefixes from
//! `href`/`src` values. Each pass materializes its matches from the live tree
//! before detaching anything, so removal never invalidates the nodes still
//! being visited.

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::{
    ARCHIVE_HOST, ARCHIVE_IFRAME_SELECTOR, ARCHIVE_SCRIPT_SELECTOR, ARCHIVE_STYLESHEET_SELECTOR,
    TOOLBAR_SELECTOR, URL_ATTR_SELECTOR,
};
use crate::rewrite::strip_wayback_prefix;

/// Attributes eligible for the rewrite pass.
const URL_ATTRIBUTES: [&str; 2] = ["href", "src"];

/// Remove every element injected by the archive service.
///
/// Passes run in order: toolbar scripts, stylesheets, playback iframes, then
/// any element whose `id` starts with `wm-`. Removing an element removes its
/// whole subtree, so later passes operate on the already-reduced tree.
pub fn remove_injected_elements(doc: &Document) {
    for selector in [
        ARCHIVE_SCRIPT_SELECTOR,
        ARCHIVE_STYLESHEET_SELECTOR,
        ARCHIVE_IFRAME_SELECTOR,
        TOOLBAR_SELECTOR,
    ] {
        remove_all(doc, selector);
    }
}

/// Remove all elements matching `selector`, snapshotting matches first.
fn remove_all(doc: &Document, selector: &str) {
    let matches: Vec<_> = doc.select(selector).nodes().to_vec();
    for node in matches {
        Selection::from(node).remove();
    }
}

/// Strip leftover Wayback prefixes from `href`/`src` attribute values.
///
/// Covers the archived references the textual pass cannot rewrite, such as
/// prefixes in front of relative targets. Values without an archive host
/// substring are not touched at all.
pub fn rewrite_archive_attributes(doc: &Document) {
    let nodes: Vec<_> = doc.select(URL_ATTR_SELECTOR).nodes().to_vec();
    for node in nodes {
        let sel = Selection::from(node);
        for attr in URL_ATTRIBUTES {
            let Some(value) = dom::get_attribute(&sel, attr) else {
                continue;
            };
            if !value.contains(ARCHIVE_HOST) {
                continue;
            }
            let stripped = strip_wayback_prefix(&value);
            if stripped != value.as_str() {
                dom::set_attribute(&sel, attr, &stripped);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_archive_script_with_src() {
        let doc = dom::parse(
            r#"<html><head>
            <script src="https://web.archive.org/_static/js/wombat.js"></script>
            <script src="/site.js"></script>
            </head><body></body></html>"#,
        );

        remove_injected_elements(&doc);

        assert_eq!(doc.select("script").length(), 1);
        assert_eq!(
            dom::get_attribute(&doc.select("script"), "src"),
            Some("/site.js".to_string())
        );
    }

    #[test]
    fn keeps_inline_script_without_src() {
        let doc = dom::parse("<body><script>var x = 1;</script></body>");

        remove_injected_elements(&doc);

        assert!(doc.select("script").exists());
    }

    #[test]
    fn removes_archive_stylesheet_and_iframe() {
        let doc = dom::parse(
            r#"<html><head>
            <link href="https://web.archive.org/_static/banner.css" rel="stylesheet">
            <link href="/local.css" rel="stylesheet">
            </head><body>
            <iframe src="https://web.archive.org/web/2023/https://example.com/"></iframe>
            <iframe src="https://example.com/embed"></iframe>
            </body></html>"#,
        );

        remove_injected_elements(&doc);

        assert_eq!(doc.select("link").length(), 1);
        assert_eq!(doc.select("iframe").length(), 1);
        assert_eq!(
            dom::get_attribute(&doc.select("iframe"), "src"),
            Some("https://example.com/embed".to_string())
        );
    }

    #[test]
    fn removes_toolbar_subtree() {
        let doc = dom::parse(
            r#"<body>
            <div id="wm-ipp-base"><div id="wm-toolbar"><a href="/">inner</a></div></div>
            <p>content</p>
            </body>"#,
        );

        remove_injected_elements(&doc);

        assert!(doc.select("#wm-ipp-base").is_empty());
        assert!(doc.select("a").is_empty());
        assert!(doc.select("p").exists());
    }

    #[test]
    fn toolbar_prefix_is_exact() {
        let doc = dom::parse(r#"<body><div id="wmx">site content</div></body>"#);

        remove_injected_elements(&doc);

        assert!(doc.select("#wmx").exists());
    }

    #[test]
    fn rewrites_prefixed_relative_target() {
        let doc = dom::parse(
            r#"<body><img src="https://web.archive.org/web/20230101/images/logo.png"></body>"#,
        );

        rewrite_archive_attributes(&doc);

        assert_eq!(
            dom::get_attribute(&doc.select("img"), "src"),
            Some("images/logo.png".to_string())
        );
    }

    #[test]
    fn rewrite_leaves_prefix_free_archive_value() {
        // Contains the host but not the /web/<timestamp>/ pattern; the value
        // is inspected and left as-is.
        let doc = dom::parse(r#"<body><a href="https://web.archive.org/donate">give</a></body>"#);

        rewrite_archive_attributes(&doc);

        assert_eq!(
            dom::get_attribute(&doc.select("a"), "href"),
            Some("https://web.archive.org/donate".to_string())
        );
    }

    #[test]
    fn rewrite_handles_both_url_attributes() {
        let doc = dom::parse(
            r#"<body>
            <a href="http://web.archive.org/web/1/page.html">a</a>
            <img src="http://web.archive.org/web/2/pic.jpg">
            </body>"#,
        );

        rewrite_archive_attributes(&doc);

        assert_eq!(
            dom::get_attribute(&doc.select("a"), "href"),
            Some("page.html".to_string())
        );
        assert_eq!(
            dom::get_attribute(&doc.select("img"), "src"),
            Some("pic.jpg".to_string())
        );
    }
}
