//! The document transform.
//!
//! Composes the two independently testable stages: the textual pass over the
//! raw source, then the structural passes over the parsed tree. The result is
//! a pure function from markup text to markup text.

use std::borrow::Cow;

use crate::dom;
use crate::options::Options;
use crate::pruning;
use crate::rewrite;

/// Clean one HTML document according to `options`.
///
/// Stage order matters: the textual pass runs against the raw source so it
/// also reaches archived URLs inside inline script bodies and comments, then
/// the parsed tree is pruned and its remaining `href`/`src` values rewritten.
/// The lenient parser may insert implicit structure (`<html>`, `<head>`,
/// `<body>`) into the serialized output; the transform is idempotent from the
/// first normalized result onward.
#[must_use]
pub fn scrub_with_options(html: &str, options: &Options) -> String {
    let text = if options.rewrite_urls {
        rewrite::strip_wayback_links(html)
    } else {
        Cow::Borrowed(html)
    };

    let doc = dom::parse(&text);

    if options.remove_injected {
        pruning::remove_injected_elements(&doc);
    }
    if options.rewrite_urls {
        pruning::rewrite_archive_attributes(&doc);
    }

    dom::serialize(&doc)
}

/// Clean one HTML document using default options.
///
/// # Example
///
/// ```rust
/// let html = r#"<a href="https://web.archive.org/web/456/https://example.com/">link</a>"#;
/// let cleaned = wayback_scrub::scrub(html);
/// assert!(cleaned.contains(r#"<a href="https://example.com/">link</a>"#));
/// ```
#[must_use]
pub fn scrub(html: &str) -> String {
    scrub_with_options(html, &Options::default())
}
