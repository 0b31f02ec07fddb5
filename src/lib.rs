//! # wayback-scrub
//!
//! Strips Wayback Machine artifacts from locally mirrored HTML sites.
//!
//! Mirrors downloaded through the archive carry two kinds of residue: every
//! URL is prefixed with `http(s)://web.archive.org/web/<timestamp>/`, and the
//! playback UI injects its own scripts, stylesheets, iframes, and toolbar
//! markup. This crate rewrites prefixed URLs back to their original targets
//! and removes the injected elements, in place, across a whole directory
//! tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use wayback_scrub::scrub;
//!
//! let html = r#"<html><head>
//! <script src="https://web.archive.org/_static/toolbar.js"></script></head>
//! <body><a href="https://web.archive.org/web/20230101000000/https://example.com/">home</a>
//! </body></html>"#;
//!
//! let cleaned = scrub(html);
//! assert!(cleaned.contains(r#"href="https://example.com/""#));
//! assert!(!cleaned.contains("web.archive.org"));
//! ```
//!
//! ## Pipeline
//!
//! - **Textual pass**: archived URLs in the raw source are rewritten to their
//!   original targets, reaching attribute values, inline scripts, and
//!   comments uniformly.
//! - **Structural passes**: the document is parsed leniently, injected
//!   elements are removed, and leftover Wayback prefixes are stripped from
//!   the remaining `href`/`src` attributes.
//! - **Write-back**: the tree is serialized and atomically written over the
//!   original file.

mod error;
mod options;
mod process;
mod scrub;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Compiled regex patterns and CSS selectors for artifact removal.
pub mod patterns;

/// Structural removal and attribute rewrite passes.
pub mod pruning;

/// Textual URL normalization.
pub mod rewrite;

/// Directory traversal and HTML file selection.
pub mod walk;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;
pub use process::{process_file, process_tree, Summary};
pub use scrub::{scrub, scrub_with_options};
