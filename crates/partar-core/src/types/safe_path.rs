//! Lexical validation of entry paths against the destination root.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::ExtractionError;
use crate::Result;

/// Joins an archive entry path onto the destination root, rejecting paths
/// that would resolve outside it.
///
/// The walk is purely lexical: `..`, root, and prefix components are
/// rejected, `.` components are dropped. No filesystem access happens here;
/// the destination tree may not exist yet while jobs are still in flight.
pub(crate) fn join_within(dest: &Path, entry_path: &Path) -> Result<PathBuf> {
    let mut joined = dest.to_path_buf();
    for component in entry_path.components() {
        match component {
            Component::Normal(part) => joined.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ExtractionError::PathTraversal {
                    path: entry_path.to_path_buf(),
                });
            }
        }
    }
    Ok(joined)
}
