//! Error types for wayback-scrub.
//!
//! This module defines the per-file error types returned by file processing.
//! The transform itself is total; only filesystem traffic can fail.

use std::path::PathBuf;

/// Error type for per-file processing operations.
///
/// Each variant carries the offending path and the underlying cause so a
/// single printed line identifies both. Failures are reported per file and
/// never abort a batch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O cause.
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not valid UTF-8.
    #[error("failed to decode {} as UTF-8: {source}", path.display())]
    Decode {
        /// Path of the undecodable file.
        path: PathBuf,
        /// Underlying decode cause.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The cleaned document could not be written back.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Path of the unwritable file.
        path: PathBuf,
        /// Underlying I/O cause.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for per-file processing operations.
pub type Result<T> = std::result::Result<T, Error>;
