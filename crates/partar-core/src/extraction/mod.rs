//! The extraction pipeline.
//!
//! Decoding is strictly sequential: the gzip-over-tar container is a
//! forward-only stream, so headers and content are consumed in archive
//! order by a single producer. Disk writes fan out across a bounded pool
//! of blocking worker tasks. Worker failures are collected in a bounded
//! channel and the first one observed is surfaced after every dispatched
//! job has finished.

pub mod engine;
pub(crate) mod materialize;
pub(crate) mod pool;
pub(crate) mod stream;

pub use engine::Extractor;
