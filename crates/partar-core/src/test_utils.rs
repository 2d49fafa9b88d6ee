//! Test utilities for building gzip-compressed tar archives.
//!
//! This module provides reusable helpers for creating in-memory test
//! archives, reducing duplication across unit, integration, and benchmark
//! code.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;

/// Creates an in-memory tar.gz archive from a list of regular files.
///
/// Each entry is a tuple of (path, content). Files are created with mode
/// 0o644.
///
/// # Examples
///
/// ```
/// use partar_core::test_utils::create_test_tar_gz;
///
/// let data = create_test_tar_gz(vec![("file.txt", b"hello"), ("dir/nested.txt", b"world")]);
/// ```
#[must_use]
pub fn create_test_tar_gz(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    let mut builder = TarGzBuilder::new();
    for (path, data) in entries {
        builder = builder.add_file(path, data);
    }
    builder.build()
}

/// Builder for tar.gz test archives with various entry types.
///
/// # Examples
///
/// ```
/// use partar_core::test_utils::TarGzBuilder;
///
/// let data = TarGzBuilder::new()
///     .add_directory("dir1/")
///     .add_file("dir1/file1.txt", b"file in dir1")
///     .add_symlink("symlink1", "dir1/file1.txt")
///     .build();
/// ```
pub struct TarGzBuilder {
    builder: tar::Builder<Vec<u8>>,
}

impl TarGzBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: tar::Builder::new(Vec::new()),
        }
    }

    /// Adds a regular file with mode 0o644.
    #[must_use]
    pub fn add_file(self, path: &str, data: &[u8]) -> Self {
        self.add_file_with_mode(path, data, 0o644)
    }

    /// Adds a regular file with a custom mode.
    #[must_use]
    pub fn add_file_with_mode(mut self, path: &str, data: &[u8], mode: u32) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(mode);
        header.set_cksum();
        self.builder.append_data(&mut header, path, data).unwrap();
        self
    }

    /// Adds a regular file whose name bypasses the tar crate's path
    /// checks, for simulating hostile archives (`..`, absolute paths).
    ///
    /// The name must fit in the 100-byte header field.
    #[must_use]
    pub fn add_file_with_unchecked_path(mut self, path: &str, data: &[u8]) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        let name = path.as_bytes();
        assert!(name.len() <= 100, "unchecked path too long for header field");
        header.as_old_mut().name[..name.len()].copy_from_slice(name);
        header.set_cksum();
        self.builder.append(&header, data).unwrap();
        self
    }

    /// Adds a directory entry.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(0o755);
        header.set_entry_type(tar::EntryType::Directory);
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Adds a symlink entry.
    #[must_use]
    pub fn add_symlink(mut self, path: &str, target: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(0o777);
        header.set_entry_type(tar::EntryType::Symlink);
        header.set_link_name(target).unwrap();
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Adds a hardlink entry.
    #[must_use]
    pub fn add_hardlink(mut self, path: &str, target: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(0o644);
        header.set_entry_type(tar::EntryType::Link);
        header.set_link_name(target).unwrap();
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Adds a FIFO entry.
    #[must_use]
    pub fn add_fifo(mut self, path: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(0);
        header.set_mode(0o644);
        header.set_entry_type(tar::EntryType::Fifo);
        header.set_cksum();
        self.builder
            .append_data(&mut header, path, std::io::empty())
            .unwrap();
        self
    }

    /// Builds the archive and wraps it in a gzip envelope.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        let tar_bytes = self.builder.into_inner().unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&tar_bytes).unwrap();
        encoder.finish().unwrap()
    }

    /// Builds the archive without the gzip envelope (a bare tar stream),
    /// for corrupt-envelope tests.
    #[must_use]
    pub fn build_uncompressed(self) -> Vec<u8> {
        self.builder.into_inner().unwrap()
    }
}

impl Default for TarGzBuilder {
    fn default() -> Self {
        Self::new()
    }
}
