//! Concurrent tar.gz extraction with a bounded worker pool.
//!
//! `partar-core` decompresses and unpacks a gzip-compressed tar archive to
//! a destination directory tree. Decoding is strictly sequential (the
//! compressed stream is forward-only); disk writes fan out across a
//! bounded pool of worker threads, with per-entry failures aggregated and
//! the first one observed surfaced after all work has finished.
//!
//! # Examples
//!
//! ```no_run
//! use partar_core::ExtractConfig;
//! use partar_core::extract_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ExtractConfig::default();
//! let report = extract_archive("app.tar.gz", "/srv/app", &config)?;
//! println!("extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod extraction;
pub mod report;
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use api::extract_archive;
pub use api::list_archive;
pub use config::DEFAULT_MAX_WORKERS;
pub use config::ExtractConfig;
pub use config::UnsupportedPolicy;
pub use error::ExtractionError;
pub use error::Result;
pub use extraction::Extractor;
pub use report::ExtractionReport;

// Re-export types module for easier access
pub use types::ArchiveEntry;
pub use types::EntryKind;
