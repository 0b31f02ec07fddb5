//! Textual URL normalization.
//!
//! The first scrub stage runs over the raw source before any parsing, so it
//! reaches archived URLs wherever they occur: attribute values, inline script
//! bodies, and comments alike. The companion prefix stripper is reused by the
//! tree stage for attribute values the full-URL form does not cover.

use std::borrow::Cow;

use crate::patterns::{WAYBACK_LINK, WAYBACK_PREFIX};

/// Replace every archive-prefixed URL in `html` with its original target.
///
/// `https?://web.archive.org/web/<timestamp>/<original>` becomes `<original>`
/// verbatim, for every non-overlapping occurrence. Only targets that are
/// themselves absolute `http(s)` URLs are rewritten here; prefixed relative
/// targets are left for the attribute rewrite pass.
///
/// Returns `Cow::Borrowed` when the input contains no archived URLs.
#[must_use]
pub fn strip_wayback_links(html: &str) -> Cow<'_, str> {
    WAYBACK_LINK.replace_all(html, "$1")
}

/// Remove every Wayback prefix occurring anywhere in an attribute value.
///
/// This is a global removal of the prefix pattern, not a true prefix check:
/// the pattern is deleted wherever it matches and the rest of the value is
/// untouched.
#[must_use]
pub fn strip_wayback_prefix(value: &str) -> Cow<'_, str> {
    WAYBACK_PREFIX.replace_all(value, "")
}
