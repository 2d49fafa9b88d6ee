//! Extraction operation reporting.

use std::time::Duration;

/// Report of an archive extraction operation.
///
/// Counters are aggregated from worker outcomes once every dispatched job
/// has finished.
#[derive(Debug, Clone, Default)]
pub struct ExtractionReport {
    /// Number of regular files written.
    pub files_extracted: usize,

    /// Number of explicit directory entries materialized.
    pub directories_created: usize,

    /// Number of symlinks created.
    pub symlinks_created: usize,

    /// Number of entries skipped under the unsupported-entry policy.
    pub entries_skipped: usize,

    /// Total file content bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the extraction operation.
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of entries materialized.
    #[must_use]
    pub const fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created + self.symlinks_created
    }
}
