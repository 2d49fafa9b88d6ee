//! Per-entry filesystem materialization.

use std::fs;
use std::io;
use std::io::Write;
use std::path::Path;

use tracing::trace;

use crate::ExtractionError;
use crate::Result;
use crate::config::ExtractConfig;
use crate::config::UnsupportedPolicy;
use crate::types::EntryKind;
use crate::types::ExtractionJob;

/// Outcome of one successfully completed materializer job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Materialized {
    /// A regular file was written.
    File {
        /// Content bytes written.
        bytes: u64,
    },
    /// A directory entry was materialized.
    Directory,
    /// A symlink was created.
    Symlink,
    /// The entry was skipped under [`UnsupportedPolicy::Skip`].
    Skipped,
}

/// Realizes one archive entry on the filesystem.
///
/// Runs on a worker thread, concurrently with siblings. Ancestor
/// directories are created with create-if-absent semantics, so workers
/// racing on a shared parent chain all succeed; no ordering between a
/// directory entry and entries nested under it is assumed.
pub(crate) fn materialize(job: &ExtractionJob, config: &ExtractConfig) -> Result<Materialized> {
    trace!(path = %job.dest_path.display(), "materializing entry");
    match &job.entry.kind {
        EntryKind::Directory => {
            fs::create_dir_all(&job.dest_path).map_err(|e| write_error(job, e))?;
            Ok(Materialized::Directory)
        }
        EntryKind::Symlink { target } => {
            ensure_parent(&job.dest_path).map_err(|e| link_error(job, e))?;
            create_symlink(target, &job.dest_path).map_err(|e| link_error(job, e))?;
            Ok(Materialized::Symlink)
        }
        EntryKind::File => {
            ensure_parent(&job.dest_path).map_err(|e| write_error(job, e))?;
            write_file(job, config).map_err(|e| write_error(job, e))?;
            Ok(Materialized::File {
                bytes: job.content.len() as u64,
            })
        }
        EntryKind::Other => match config.unsupported {
            UnsupportedPolicy::Skip => {
                trace!(path = %job.entry.path.display(), "skipping unsupported entry");
                Ok(Materialized::Skipped)
            }
            UnsupportedPolicy::Fail => Err(ExtractionError::Unsupported {
                path: job.entry.path.clone(),
            }),
        },
    }
}

/// Idempotently creates the parent directory chain of `dest`.
///
/// Concurrent workers may race on shared ancestors; `create_dir_all`
/// treats already-exists as success.
fn ensure_parent(dest: &Path) -> io::Result<()> {
    match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

fn write_file(job: &ExtractionJob, config: &ExtractConfig) -> io::Result<()> {
    // Create-and-truncate: a repeated entry name is last-writer-wins.
    let mut file = fs::File::create(&job.dest_path)?;
    file.write_all(&job.content)?;

    #[cfg(unix)]
    if config.preserve_permissions && job.entry.mode != 0 {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(job.entry.mode & 0o7777))?;
    }
    #[cfg(not(unix))]
    let _ = config;

    Ok(())
}

#[cfg(unix)]
fn create_symlink(target: &Path, dest: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, dest)
}

#[cfg(windows)]
fn create_symlink(target: &Path, dest: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, dest)
}

#[cfg(not(any(unix, windows)))]
fn create_symlink(_target: &Path, _dest: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symlinks are not supported on this platform",
    ))
}

fn write_error(job: &ExtractionJob, source: io::Error) -> ExtractionError {
    ExtractionError::Write {
        path: job.dest_path.clone(),
        source,
    }
}

fn link_error(job: &ExtractionJob, source: io::Error) -> ExtractionError {
    ExtractionError::Link {
        path: job.dest_path.clone(),
        source,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::ArchiveEntry;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn job(dest_root: &Path, rel: &str, kind: EntryKind, content: &[u8]) -> ExtractionJob {
        ExtractionJob {
            entry: ArchiveEntry {
                path: PathBuf::from(rel),
                kind,
                mode: 0o644,
                size: content.len() as u64,
            },
            content: content.to_vec(),
            dest_path: dest_root.join(rel),
        }
    }

    #[test]
    fn test_file_with_missing_parent_chain() {
        let temp = TempDir::new().unwrap();
        let config = ExtractConfig::default();
        let job = job(temp.path(), "a/b/c/file.txt", EntryKind::File, b"nested");

        let outcome = materialize(&job, &config).unwrap();
        assert_eq!(outcome, Materialized::File { bytes: 6 });
        assert_eq!(
            fs::read_to_string(temp.path().join("a/b/c/file.txt")).unwrap(),
            "nested"
        );
    }

    #[test]
    fn test_directory_entry_creates_own_path() {
        let temp = TempDir::new().unwrap();
        let config = ExtractConfig::default();
        let job = job(temp.path(), "dir1", EntryKind::Directory, b"");

        let outcome = materialize(&job, &config).unwrap();
        assert_eq!(outcome, Materialized::Directory);
        assert!(temp.path().join("dir1").is_dir());
    }

    #[test]
    fn test_directory_entry_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let config = ExtractConfig::default();
        fs::create_dir(temp.path().join("dir1")).unwrap();

        let job = job(temp.path(), "dir1", EntryKind::Directory, b"");
        assert_eq!(materialize(&job, &config).unwrap(), Materialized::Directory);
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_records_target_verbatim() {
        let temp = TempDir::new().unwrap();
        let config = ExtractConfig::default();
        let job = job(
            temp.path(),
            "symlink1",
            EntryKind::Symlink {
                target: PathBuf::from("dir1/file1.txt"),
            },
            b"",
        );

        let outcome = materialize(&job, &config).unwrap();
        assert_eq!(outcome, Materialized::Symlink);
        assert_eq!(
            fs::read_link(temp.path().join("symlink1")).unwrap(),
            PathBuf::from("dir1/file1.txt")
        );
    }

    #[test]
    fn test_unsupported_entry_skips_by_default() {
        let temp = TempDir::new().unwrap();
        let config = ExtractConfig::default();
        let job = job(temp.path(), "pipe", EntryKind::Other, b"");

        assert_eq!(materialize(&job, &config).unwrap(), Materialized::Skipped);
        assert!(!temp.path().join("pipe").exists());
    }

    #[test]
    fn test_unsupported_entry_fails_under_policy() {
        let temp = TempDir::new().unwrap();
        let config = ExtractConfig {
            unsupported: UnsupportedPolicy::Fail,
            ..Default::default()
        };
        let job = job(temp.path(), "pipe", EntryKind::Other, b"");

        let err = materialize(&job, &config).unwrap_err();
        assert!(matches!(err, ExtractionError::Unsupported { .. }));
        assert_eq!(err.path(), Some(Path::new("pipe")));
    }

    #[test]
    fn test_write_failure_carries_destination_path() {
        let temp = TempDir::new().unwrap();
        let config = ExtractConfig::default();
        // A file where the parent chain needs a directory.
        fs::write(temp.path().join("blocked"), b"in the way").unwrap();

        let job = job(temp.path(), "blocked/inner.txt", EntryKind::File, b"data");
        let err = materialize(&job, &config).unwrap_err();
        assert!(matches!(err, ExtractionError::Write { .. }));
        assert_eq!(err.path(), Some(temp.path().join("blocked/inner.txt").as_path()));
    }

    #[test]
    #[cfg(unix)]
    fn test_preserve_permissions_applies_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let config = ExtractConfig {
            preserve_permissions: true,
            ..Default::default()
        };
        let mut job = job(temp.path(), "script.sh", EntryKind::File, b"#!/bin/sh\n");
        job.entry.mode = 0o755;

        materialize(&job, &config).unwrap();
        let mode = fs::metadata(temp.path().join("script.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    #[cfg(unix)]
    fn test_mode_ignored_without_preserve_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let config = ExtractConfig::default();
        let mut job = job(temp.path(), "script.sh", EntryKind::File, b"#!/bin/sh\n");
        job.entry.mode = 0o700;

        materialize(&job, &config).unwrap();
        let mode = fs::metadata(temp.path().join("script.sh"))
            .unwrap()
            .permissions()
            .mode();
        // Process default mode, not the archive's.
        assert_ne!(mode & 0o777, 0o700);
    }
}
