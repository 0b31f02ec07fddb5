//! Per-file processing and the batch driver.
//!
//! Each file's lifecycle is read → transform → write-back, completed before
//! the next file begins. The write-back goes through a temporary file in the
//! same directory followed by an atomic rename, so an interrupted run never
//! leaves a half-written document behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::options::Options;
use crate::scrub::scrub_with_options;
use crate::walk::collect_html_files;

/// Outcome counters for one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Files read, transformed, and written back (or checked, on a dry run).
    pub scrubbed: u64,
    /// Files skipped because reading, decoding, or writing failed.
    pub failed: u64,
}

/// Clean a single HTML file in place.
///
/// Reads the file as UTF-8, applies the transform, and overwrites the file at
/// its original path. With `options.dry_run` the write-back is skipped.
pub fn process_file(path: &Path, options: &Options) -> Result<()> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let html = String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let cleaned = scrub_with_options(&html, options);

    if options.dry_run {
        return Ok(());
    }
    write_in_place(path, &cleaned)
}

/// Overwrite `path` with `contents` via temp-file-and-rename.
fn write_in_place(path: &Path, contents: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let result: std::io::Result<()> = (|| {
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.persist(path).map_err(|err| err.error)?;
        Ok(())
    })();
    result.map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Clean every HTML file under `root`, one at a time.
///
/// Prints one progress line per file: successes to stdout, failures (with
/// path and cause) to stderr. A failed file never stops the batch.
pub fn process_tree(root: &Path, options: &Options) -> Summary {
    let mut summary = Summary::default();

    for path in collect_html_files(root, options) {
        match process_file(&path, options) {
            Ok(()) => {
                if options.dry_run {
                    println!("would scrub {}", path.display());
                } else {
                    println!("scrubbed {}", path.display());
                }
                summary.scrubbed = summary.scrubbed.saturating_add(1);
            }
            Err(err) => {
                eprintln!("{err}");
                summary.failed = summary.failed.saturating_add(1);
            }
        }
    }

    summary
}
