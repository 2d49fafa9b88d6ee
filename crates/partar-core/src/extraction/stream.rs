//! Sequential stream decoding and entry classification.

use std::fs::File;
use std::io::BufReader;
use std::io::ErrorKind;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;

use crate::ExtractionError;
use crate::Result;
use crate::types::ArchiveEntry;
use crate::types::EntryKind;
use crate::types::ExtractionJob;
use crate::types::safe_path::join_within;

/// The decoder stack for a gzip-compressed tar archive on disk.
pub(crate) type TarGzArchive = tar::Archive<GzDecoder<BufReader<File>>>;

/// Opens the decoder stack over an archive file.
///
/// Failure to open the file is an I/O error; everything read after this
/// point goes through the decompression layer and is classified by
/// [`decode_error`].
pub(crate) fn open_archive(path: &Path) -> Result<TarGzArchive> {
    let file = File::open(path)?;
    Ok(tar::Archive::new(GzDecoder::new(BufReader::new(file))))
}

/// Classifies a stream error as a decode failure or a plain I/O failure.
///
/// The gzip layer reports malformed input as invalid-input or invalid-data,
/// a truncated stream as unexpected EOF, and the tar crate's structural
/// errors surface with the catch-all kind. Anything else is an honest read
/// failure on the underlying stream.
pub(crate) fn decode_error(err: std::io::Error) -> ExtractionError {
    match err.kind() {
        ErrorKind::InvalidData
        | ErrorKind::InvalidInput
        | ErrorKind::UnexpectedEof
        | ErrorKind::Other => ExtractionError::Decode(err.to_string()),
        _ => ExtractionError::Io(err),
    }
}

/// Decodes one entry header into an [`ArchiveEntry`].
pub(crate) fn entry_meta<R: Read>(entry: &tar::Entry<'_, R>) -> Result<ArchiveEntry> {
    let path = entry.path().map_err(decode_error)?.into_owned();
    let header = entry.header();
    let entry_type = header.entry_type();

    let kind = if entry_type.is_dir() {
        EntryKind::Directory
    } else if entry_type.is_symlink() {
        let target = entry.link_name().map_err(decode_error)?.ok_or_else(|| {
            ExtractionError::Decode(format!("symlink entry {} has no target", path.display()))
        })?;
        EntryKind::Symlink {
            target: target.into_owned(),
        }
    } else if entry_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    };

    Ok(ArchiveEntry {
        kind,
        mode: header.mode().map_err(decode_error)?,
        size: entry.size(),
        path,
    })
}

/// Builds the extraction job for one entry, reading regular-file content
/// eagerly.
///
/// Content must be read before the archive iterator advances: the stream is
/// forward-only and an entry's bytes are unreachable afterwards. Memory cost
/// is one file's content at a time, not the whole archive, because dispatch
/// does not wait for earlier jobs to finish writing.
pub(crate) fn classify<R: Read>(
    entry: &mut tar::Entry<'_, R>,
    dest_root: &Path,
) -> Result<ExtractionJob> {
    let meta = entry_meta(entry)?;

    let content = if meta.kind.is_file() {
        // The header size is untrusted; let the bounded entry reader size
        // the allocation instead of preallocating from it.
        let mut buf = Vec::new();
        entry.read_to_end(&mut buf).map_err(decode_error)?;
        buf
    } else {
        Vec::new()
    };

    let dest_path = join_within(dest_root, &meta.path)?;

    Ok(ExtractionJob {
        entry: meta,
        content,
        dest_path,
    })
}
