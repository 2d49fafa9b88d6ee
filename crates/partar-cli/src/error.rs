//! Error conversion utilities for the CLI.
//!
//! Converts partar-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use partar_core::ExtractionError;
use std::path::Path;

/// Converts an `ExtractionError` into a user-friendly anyhow error.
pub fn convert_extraction_error(err: ExtractionError, archive: &Path) -> anyhow::Error {
    match err {
        ExtractionError::PathTraversal { path } => {
            anyhow!(
                "Security violation: archive '{}' attempted path traversal with '{}'\n\
                 HINT: This archive may be malicious. Do not extract from untrusted sources.",
                archive.display(),
                path.display()
            )
        }
        ExtractionError::Decode(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted, or not a gzip-compressed tar.",
                archive.display(),
                reason
            )
        }
        ExtractionError::Unsupported { path } => {
            anyhow!(
                "Unsupported entry '{}' in archive '{}'\n\
                 HINT: Drop --fail-unsupported to skip such entries instead.",
                path.display(),
                archive.display()
            )
        }
        ExtractionError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                archive.display(),
                io_err
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Error processing archive '{}'", archive.display())),
    }
}

/// Adds archive context to a core extraction result.
pub fn add_archive_context<T>(
    result: Result<T, ExtractionError>,
    archive: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_extraction_error(e, archive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_convert_path_traversal_error() {
        let err = ExtractionError::PathTraversal {
            path: PathBuf::from("../../../etc/passwd"),
        };
        let converted = convert_extraction_error(err, Path::new("malicious.tar.gz"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("path traversal"));
        assert!(msg.contains("malicious.tar.gz"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_decode_error() {
        let err = ExtractionError::Decode("corrupt deflate stream".to_string());
        let converted = convert_extraction_error(err, Path::new("broken.tar.gz"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("Invalid archive"));
        assert!(msg.contains("corrupt deflate stream"));
    }

    #[test]
    fn test_convert_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ExtractionError::Io(io_err);
        let converted = convert_extraction_error(err, Path::new("archive.tar.gz"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("I/O error"));
    }

    #[test]
    fn test_convert_write_error_keeps_source() {
        let err = ExtractionError::Write {
            path: PathBuf::from("out/file.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let converted = convert_extraction_error(err, Path::new("archive.tar.gz"));
        let msg = format!("{converted:?}");
        assert!(msg.contains("archive.tar.gz"));
        assert!(msg.contains("out/file.txt"));
    }
}
