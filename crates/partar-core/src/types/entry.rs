//! Archive entry model.

use std::path::PathBuf;

/// Kind of entry in a tar archive.
///
/// The symlink target is carried inside the variant: a target exists
/// exactly when the entry is a symlink.
///
/// # Examples
///
/// ```
/// use partar_core::EntryKind;
/// use std::path::PathBuf;
///
/// let file = EntryKind::File;
/// let directory = EntryKind::Directory;
/// let symlink = EntryKind::Symlink {
///     target: PathBuf::from("dir1/file1.txt"),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file entry.
    File,

    /// Directory entry.
    Directory,

    /// Symbolic link entry.
    ///
    /// The target is recorded as-is from the archive and is not resolved
    /// or validated against the destination tree.
    Symlink {
        /// The link target path.
        target: PathBuf,
    },

    /// Any entry type this engine does not materialize: hard links, FIFOs,
    /// device nodes, and unknown typeflags.
    Other,
}

impl EntryKind {
    /// Returns `true` if this is a regular file.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File)
    }

    /// Returns `true` if this is a directory.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Returns `true` if this is a symlink.
    #[must_use]
    pub const fn is_symlink(&self) -> bool {
        matches!(self, Self::Symlink { .. })
    }
}

/// One decoded archive member: header metadata without content.
///
/// Produced by the stream decoder in archive order, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Entry path relative to the archive root, as recorded in the header.
    pub path: PathBuf,

    /// Entry kind, including the symlink target when applicable.
    pub kind: EntryKind,

    /// Permission bits from the header.
    pub mode: u32,

    /// Content size in bytes from the header.
    pub size: u64,
}

/// A unit of work for one materializer worker.
///
/// Created by the classifier once the entry's content (if any) has been
/// read from the sequential stream; ownership moves into exactly one
/// worker and the job is immutable from dispatch onwards.
#[derive(Debug)]
pub struct ExtractionJob {
    /// The decoded entry.
    pub entry: ArchiveEntry,

    /// Full file content for regular files; empty for everything else.
    pub content: Vec<u8>,

    /// Validated absolute destination path for this entry.
    pub dest_path: PathBuf,
}
