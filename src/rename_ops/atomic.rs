//! Rename primitives.
//! - Single atomic rename for the default path.
//! - Two-step rename through a temporary sibling for case-only changes, which some
//!   case-insensitive filesystems otherwise treat as a no-op.
//! - On Unix, best-effort fsync of the parent directory after the final step.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

use super::util::{case_swap_temp_path, fsync_dir};

/// Rename `from` to `to` in one step.
///
/// The caller has already checked that `to` is free; no overwrite guard here.
pub fn rename_atomic(from: &Path, to: &Path) -> io::Result<()> {
    fs::rename(from, to)?;
    sync_parent(to);
    Ok(())
}

/// Rename `from` to `to`, where the two names differ only in letter case.
///
/// Goes `from -> <from>.__temp__ -> to`. If the second step fails, the file is
/// moved back to `from` (best-effort) before the error is returned.
pub fn rename_case_only(from: &Path, to: &Path) -> io::Result<()> {
    let tmp = case_swap_temp_path(from);
    debug!(from = %from.display(), tmp = %tmp.display(), "case-only rename: step 1");
    fs::rename(from, &tmp)?;

    if let Err(e) = fs::rename(&tmp, to) {
        if let Err(back) = fs::rename(&tmp, from) {
            warn!(
                tmp = %tmp.display(),
                original = %from.display(),
                error = %back,
                "could not restore original name; file left under temporary name"
            );
        }
        return Err(e);
    }

    debug!(tmp = %tmp.display(), to = %to.display(), "case-only rename: step 2");
    sync_parent(to);
    Ok(())
}

fn sync_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        // A failed fsync does not undo a completed rename.
        let _ = fsync_dir(parent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn case_only_leaves_no_temp_behind() {
        let td = tempdir().unwrap();
        let from = td.path().join("photo.jpg");
        let to = td.path().join("Photo.jpg");
        fs::write(&from, b"pixels").unwrap();

        rename_case_only(&from, &to).unwrap();

        let names: Vec<String> = fs::read_dir(td.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Photo.jpg".to_string()]);
        assert_eq!(fs::read(&to).unwrap(), b"pixels");
    }

    #[test]
    fn atomic_missing_source_errors() {
        let td = tempdir().unwrap();
        let err = rename_atomic(&td.path().join("nope"), &td.path().join("x")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
