//! High-level public API for archive extraction and listing.

use std::path::Path;

use crate::Result;
use crate::config::ExtractConfig;
use crate::extraction::Extractor;
use crate::extraction::stream;
use crate::report::ExtractionReport;
use crate::types::ArchiveEntry;

/// Extracts a gzip-compressed tar archive to the given destination
/// directory.
///
/// Entries are decoded sequentially in archive order and written
/// concurrently by a bounded worker pool. The destination directory need
/// not pre-exist.
///
/// # Errors
///
/// Returns an error if:
/// - the archive cannot be opened or read
/// - the gzip envelope or tar structure is malformed (aborts immediately,
///   before any further entry is dispatched)
/// - any single entry fails to materialize; the first such failure is
///   returned after all in-flight work has finished, carrying the failed
///   entry's path, and entries extracted before it remain on disk
///
/// # Examples
///
/// ```no_run
/// use partar_core::ExtractConfig;
/// use partar_core::extract_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ExtractConfig::default();
/// let report = extract_archive("app.tar.gz", "/srv/app", &config)?;
/// println!("extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    dest_dir: Q,
    config: &ExtractConfig,
) -> Result<ExtractionReport> {
    Extractor::new(config.clone()).extract(archive_path.as_ref(), dest_dir.as_ref())
}

/// Lists the entries of a gzip-compressed tar archive without extracting.
///
/// Decodes headers only, in archive order; no content is read into memory
/// and nothing is written to disk.
///
/// # Errors
///
/// Returns an error if the archive cannot be opened or its stream is
/// malformed.
///
/// # Examples
///
/// ```no_run
/// use partar_core::list_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// for entry in list_archive("app.tar.gz")? {
///     println!("{} ({} bytes)", entry.path.display(), entry.size);
/// }
/// # Ok(())
/// # }
/// ```
pub fn list_archive<P: AsRef<Path>>(archive_path: P) -> Result<Vec<ArchiveEntry>> {
    let mut archive = stream::open_archive(archive_path.as_ref())?;
    let mut entries = Vec::new();
    for entry in archive.entries().map_err(stream::decode_error)? {
        let entry = entry.map_err(stream::decode_error)?;
        entries.push(stream::entry_meta(&entry)?);
    }
    Ok(entries)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::TarGzBuilder;
    use crate::types::EntryKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_archive_reports_entries_in_order() {
        let temp = TempDir::new().unwrap();
        let archive_path = temp.path().join("test.tar.gz");
        fs::write(
            &archive_path,
            TarGzBuilder::new()
                .add_directory("dir1/")
                .add_file("dir1/file1.txt", b"file in dir1")
                .add_symlink("symlink1", "dir1/file1.txt")
                .build(),
        )
        .unwrap();

        let entries = list_archive(&archive_path).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[1].path, std::path::PathBuf::from("dir1/file1.txt"));
        assert_eq!(entries[1].size, 12);
        assert!(entries[2].kind.is_symlink());
    }

    #[test]
    fn test_list_archive_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let archive_path = temp.path().join("test.tar.gz");
        fs::write(
            &archive_path,
            TarGzBuilder::new().add_file("file1.txt", b"hello").build(),
        )
        .unwrap();

        list_archive(&archive_path).unwrap();
        assert!(!temp.path().join("file1.txt").exists());
    }
}
