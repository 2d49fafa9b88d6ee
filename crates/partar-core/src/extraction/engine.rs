//! Core extraction engine.

use std::path::Path;
use std::time::Instant;

use tokio::sync::mpsc;
use tracing::debug;
use tracing::trace;

use crate::ExtractionError;
use crate::Result;
use crate::config::ExtractConfig;
use crate::extraction::materialize::Materialized;
use crate::extraction::materialize::materialize;
use crate::extraction::pool::WorkerPool;
use crate::extraction::stream;
use crate::report::ExtractionReport;

/// The extraction engine.
///
/// One sequential producer decodes and classifies entries in archive
/// order; up to `max_workers` materializer jobs write to disk
/// concurrently. Completion order across workers is unspecified.
///
/// Nothing persists across [`extract`] calls except the destination tree.
///
/// [`extract`]: Extractor::extract
///
/// # Examples
///
/// ```no_run
/// use partar_core::ExtractConfig;
/// use partar_core::Extractor;
/// use std::path::Path;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let extractor = Extractor::new(ExtractConfig::default());
/// let report = extractor.extract(Path::new("app.tar.gz"), Path::new("/srv/app"))?;
/// println!("extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    /// Creates an extractor with the given configuration.
    #[must_use]
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Extracts a gzip-compressed tar archive to `dest_dir`.
    ///
    /// The destination directory need not pre-exist; it is created
    /// implicitly as entries are written, so an empty archive creates
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionError::Io`] if the archive cannot be opened and
    /// [`ExtractionError::Decode`] if the stream is malformed; both abort
    /// the operation immediately. Per-entry failures are collected while
    /// the remaining entries run to completion, and the first one observed
    /// is returned, carrying that entry's path. Entries that completed
    /// before the failure remain on disk.
    pub fn extract(&self, archive_path: &Path, dest_dir: &Path) -> Result<ExtractionReport> {
        let runtime = tokio::runtime::Builder::new_current_thread().build()?;
        runtime.block_on(self.run(archive_path, dest_dir))
    }

    async fn run(&self, archive_path: &Path, dest_dir: &Path) -> Result<ExtractionReport> {
        let start = Instant::now();
        debug!(
            archive = %archive_path.display(),
            dest = %dest_dir.display(),
            workers = self.config.max_workers,
            "starting extraction"
        );

        let mut archive = stream::open_archive(archive_path)?;
        let mut pool = WorkerPool::new(self.config.max_workers);
        // Sized to the pool: at most one report per in-flight worker, and
        // sends never block (overflow is resolved below, at the drain).
        let (err_tx, mut err_rx) = mpsc::channel(self.config.max_workers.max(1));

        for entry in archive.entries().map_err(stream::decode_error)? {
            let mut entry = entry.map_err(stream::decode_error)?;
            let job = match stream::classify(&mut entry, dest_dir) {
                Ok(job) => job,
                // A traversal rejection fails that entry, not the stream.
                Err(err @ ExtractionError::PathTraversal { .. }) => {
                    let _ = err_tx.try_send(err);
                    continue;
                }
                Err(err) => return Err(err),
            };

            trace!(path = %job.entry.path.display(), "dispatching entry");
            let config = self.config.clone();
            let report_tx = err_tx.clone();
            pool.dispatch(move || match materialize(&job, &config) {
                Ok(outcome) => Some(outcome),
                Err(err) => {
                    // A full queue already holds an error that will win the
                    // drain, so dropping this one is indistinguishable from
                    // queuing it; the worker must never block here.
                    let _ = report_tx.try_send(err);
                    None
                }
            })
            .await;
        }

        // Barrier: every dispatched job has finished past this point.
        let outcomes = pool.join().await;
        // Close the intake so the drain terminates instead of waiting for
        // more reports.
        drop(err_tx);

        let mut report = ExtractionReport::new();
        for outcome in outcomes.into_iter().flatten() {
            match outcome {
                Materialized::File { bytes } => {
                    report.files_extracted += 1;
                    report.bytes_written += bytes;
                }
                Materialized::Directory => report.directories_created += 1,
                Materialized::Symlink => report.symlinks_created += 1,
                Materialized::Skipped => report.entries_skipped += 1,
            }
        }

        // Drain in completion order: the first error observed is the
        // result; whatever is still queued is discarded with the receiver.
        if let Some(err) = err_rx.recv().await {
            return Err(err);
        }

        report.duration = start.elapsed();
        debug!(
            dispatched = pool.dispatched(),
            files = report.files_extracted,
            bytes = report.bytes_written,
            "extraction complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::TarGzBuilder;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_simple_archive() {
        let temp = TempDir::new().unwrap();
        let archive_path = temp.path().join("test.tar.gz");
        fs::write(
            &archive_path,
            TarGzBuilder::new()
                .add_file("file1.txt", b"hello world")
                .build(),
        )
        .unwrap();

        let dest = temp.path().join("out");
        let report = Extractor::new(ExtractConfig::default())
            .extract(&archive_path, &dest)
            .unwrap();

        assert_eq!(report.files_extracted, 1);
        assert_eq!(report.bytes_written, 11);
        assert_eq!(fs::read_to_string(dest.join("file1.txt")).unwrap(), "hello world");
    }

    #[test]
    fn test_missing_archive_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = Extractor::new(ExtractConfig::default())
            .extract(&temp.path().join("absent.tar.gz"), &temp.path().join("out"))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Io(_)));
    }
}
