//! Directory traversal and HTML file selection.

use std::fs;
use std::path::{Path, PathBuf};

use crate::options::Options;

/// Whether a path names an HTML file, by case-insensitive suffix.
#[must_use]
pub fn is_html_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            let name = name.to_ascii_lowercase();
            name.ends_with(".html") || name.ends_with(".htm")
        })
}

/// Collect every HTML file under `root`, depth-first in sorted path order.
///
/// Subdirectories are recursed into unconditionally; symbolic links to
/// directories are skipped unless `options.follow_symlinks` is set, so link
/// cycles cannot recurse forever. An unreadable directory is reported to
/// stderr and skipped rather than aborting the walk.
#[must_use]
pub fn collect_html_files(root: &Path, options: &Options) -> Vec<PathBuf> {
    let mut files = Vec::new();
    push_html_files(root, options, &mut files);
    files
}

fn push_html_files(dir: &Path, options: &Options, acc: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("failed to list {}: {err}", dir.display());
            return;
        }
    };

    let mut entries: Vec<fs::DirEntry> = entries.flatten().collect();
    entries.sort_by_key(fs::DirEntry::path);

    for entry in entries {
        let path = entry.path();
        let is_symlink = entry
            .file_type()
            .map(|file_type| file_type.is_symlink())
            .unwrap_or(false);

        if path.is_dir() {
            if is_symlink && !options.follow_symlinks {
                continue;
            }
            push_html_files(&path, options, acc);
        } else if path.is_file() && is_html_file(&path) {
            acc.push(path);
        }
    }
}
