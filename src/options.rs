//! Configuration options for scrubbing.
//!
//! The `Options` struct controls which passes run and how the directory
//! walker behaves. All fields are public for easy configuration.

/// Configuration options for scrubbing behavior.
///
/// Use `Default::default()` for standard settings.
///
/// # Example
///
/// ```rust
/// use wayback_scrub::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     dry_run: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Rewrite archived URLs back to their original targets.
    ///
    /// Controls both the textual pass over the raw source and the
    /// `href`/`src` attribute rewrite over the parsed tree.
    ///
    /// Default: `true`
    pub rewrite_urls: bool,

    /// Remove elements injected by the archive service.
    ///
    /// Covers toolbar scripts, stylesheets, iframes, and any element whose
    /// `id` starts with `wm-`.
    ///
    /// Default: `true`
    pub remove_injected: bool,

    /// Follow symbolic links to directories while walking.
    ///
    /// Disabled by default so that link cycles inside a mirrored site
    /// cannot make the walk recurse forever.
    ///
    /// Default: `false`
    pub follow_symlinks: bool,

    /// Run the transform but skip the write-back.
    ///
    /// Files are still read, cleaned, and reported, so a dry run surfaces
    /// the same per-file read errors a real run would.
    ///
    /// Default: `false`
    pub dry_run: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rewrite_urls: true,
            remove_injected: true,
            follow_symlinks: false,
            dry_run: false,
        }
    }
}
