use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Suffix appended to a file name while it sits under its temporary name.
pub const TEMP_SUFFIX: &str = ".__temp__";

static SEQ: AtomicU64 = AtomicU64::new(0);

/// Sibling path used as the intermediate name of a case-only rename.
///
/// `<name>.__temp__` when free, otherwise `<name>.__temp__.<pid>.<seq>`.
pub(super) fn case_swap_temp_path(original: &Path) -> PathBuf {
    let mut name = original.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(TEMP_SUFFIX);
    let first = original.with_file_name(&name);
    if !occupied(&first) {
        return first;
    }
    let pid = std::process::id();
    loop {
        let seq = SEQ.fetch_add(1, Ordering::Relaxed);
        let mut alt = name.clone();
        alt.push(format!(".{pid}.{seq}"));
        let candidate = original.with_file_name(alt);
        if !occupied(&candidate) {
            return candidate;
        }
    }
}

/// True if anything (including a dangling symlink) sits at `path`.
pub(super) fn occupied(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

#[cfg(unix)]
pub(super) fn fsync_dir(dir: &Path) -> io::Result<()> {
    let f = File::open(dir)?;
    f.sync_all()
}

#[cfg(not(unix))]
pub(super) fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
