//! Compiled regex patterns and CSS selectors for Wayback artifact removal.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Substring identifying archive-hosted URLs in attribute values.
pub const ARCHIVE_HOST: &str = "web.archive.org";

// =============================================================================
// Wayback URL Patterns
// =============================================================================

/// Matches a fully archive-prefixed URL and captures the original target.
///
/// The capture is greedy up to the next whitespace or quote character, so a
/// URL written without a closing delimiter swallows everything up to the next
/// one. That matches how mirrored pages delimit attribute values in practice.
pub static WAYBACK_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://web\.archive\.org/web/\d+/(https?://[^\s'"]+)"#)
        .expect("WAYBACK_LINK regex")
});

/// Matches the bare Wayback prefix (`http(s)://web.archive.org/web/<timestamp>/`).
///
/// Used for removal anywhere inside an attribute value, not just at the start,
/// so prefixes left over after the textual pass (e.g. in front of relative
/// targets) are stripped too.
pub static WAYBACK_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://web\.archive\.org/web/\d+/").expect("WAYBACK_PREFIX regex")
});

// =============================================================================
// CSS Selectors for Injected Elements
// =============================================================================

/// Toolbar scripts injected by the archive service.
pub const ARCHIVE_SCRIPT_SELECTOR: &str = r#"script[src*="web.archive.org"]"#;

/// Toolbar stylesheets injected by the archive service.
pub const ARCHIVE_STYLESHEET_SELECTOR: &str = r#"link[href*="web.archive.org"]"#;

/// Playback iframes injected by the archive service.
pub const ARCHIVE_IFRAME_SELECTOR: &str = r#"iframe[src*="web.archive.org"]"#;

/// Toolbar DOM nodes, identified by the `wm-` id prefix.
///
/// Prefix match is exactly `wm-`; an id like `wmx` is site content.
pub const TOOLBAR_SELECTOR: &str = r#"[id^="wm-"]"#;

/// Elements carrying a URL attribute eligible for the rewrite pass.
pub const URL_ATTR_SELECTOR: &str = "[href], [src]";
