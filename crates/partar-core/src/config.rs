//! Extraction configuration.

/// Default number of concurrent materializer workers.
pub const DEFAULT_MAX_WORKERS: usize = 10;

/// Handling of archive entry types this engine does not materialize
/// (hard links, FIFOs, device nodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedPolicy {
    /// Skip the entry and count it in the extraction report.
    #[default]
    Skip,
    /// Report the entry as a failure through the error aggregator. Sibling
    /// entries still run to completion; the failure surfaces once all
    /// in-flight work has finished.
    Fail,
}

/// Configuration for an extraction call.
///
/// # Examples
///
/// ```
/// use partar_core::ExtractConfig;
///
/// // Defaults: 10 workers, skip unsupported entries, archive modes ignored
/// let config = ExtractConfig::default();
///
/// // Customize for specific needs
/// let custom = ExtractConfig {
///     max_workers: 4,
///     preserve_permissions: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Maximum number of materializer workers in flight at once.
    ///
    /// The decoding loop blocks once this many jobs are executing. A value
    /// of zero is treated as one.
    pub max_workers: usize,

    /// Apply each entry's permission bits to the created file (Unix only).
    ///
    /// When `false`, files are created with the process default mode, and
    /// the mode recorded in the archive is ignored.
    pub preserve_permissions: bool,

    /// Handling of entry types this engine does not materialize.
    pub unsupported: UnsupportedPolicy,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_workers: DEFAULT_MAX_WORKERS,
            preserve_permissions: false,
            unsupported: UnsupportedPolicy::Skip,
        }
    }
}
