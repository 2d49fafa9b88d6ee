//! Error types for archive extraction operations.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors that can occur during archive extraction.
///
/// Decode-phase errors (`Io` while opening the source, `Decode` for a
/// malformed stream) abort the whole operation. Per-entry errors (`Write`,
/// `Link`, `PathTraversal`, `Unsupported`) are captured by the worker that
/// hit them and surfaced after all in-flight work has finished; the first
/// one observed becomes the return value of the extraction call.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// I/O operation failed while opening or reading the source archive.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The gzip envelope or tar structure is malformed.
    #[error("invalid archive: {0}")]
    Decode(String),

    /// A regular file could not be materialized.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination path of the failed entry.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A symbolic link could not be materialized.
    #[error("failed to create symlink {path}: {source}")]
    Link {
        /// Destination path of the failed entry.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// An entry path escapes the destination directory.
    #[error("path escapes destination directory: {path}")]
    PathTraversal {
        /// The offending entry path, as recorded in the archive.
        path: PathBuf,
    },

    /// An entry type this engine does not materialize (hard link, FIFO,
    /// device node), reported only under [`UnsupportedPolicy::Fail`].
    ///
    /// [`UnsupportedPolicy::Fail`]: crate::config::UnsupportedPolicy::Fail
    #[error("unsupported entry type: {path}")]
    Unsupported {
        /// The entry path, as recorded in the archive.
        path: PathBuf,
    },
}

impl ExtractionError {
    /// Returns the entry path attached to this error, if any.
    ///
    /// Per-entry failures carry the path of the entry that failed;
    /// operation-level failures (`Io`, `Decode`) do not.
    ///
    /// # Examples
    ///
    /// ```
    /// use partar_core::ExtractionError;
    /// use std::path::{Path, PathBuf};
    ///
    /// let err = ExtractionError::PathTraversal {
    ///     path: PathBuf::from("../etc/passwd"),
    /// };
    /// assert_eq!(err.path(), Some(Path::new("../etc/passwd")));
    ///
    /// let err = ExtractionError::Decode("truncated stream".to_string());
    /// assert_eq!(err.path(), None);
    /// ```
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Write { path, .. }
            | Self::Link { path, .. }
            | Self::PathTraversal { path }
            | Self::Unsupported { path } => Some(path),
            Self::Io(_) | Self::Decode(_) => None,
        }
    }

    /// Returns `true` if this error aborts the whole operation rather than
    /// a single entry.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Decode(_))
    }

    /// Returns `true` if this is a decode-phase error.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
