//! I/O error hints.
//!
//! Turns an io::Error from a rename into a message naming the operation, the
//! path, a platform-aware hint and the raw OS code.

use std::io;
use std::path::Path;

/// Hint keyed on the raw OS error code, when the platform gives one we recognise.
fn os_hint(code: i32) -> Option<&'static str> {
    #[cfg(unix)]
    {
        match code {
            libc::EACCES | libc::EPERM => {
                Some("permission denied; the directory must be writable to rename its entries")
            }
            libc::EROFS => Some("read-only filesystem; nothing here can be renamed"),
            libc::ENOENT => Some("path not found; the file may have been moved by another process"),
            libc::EEXIST | libc::ENOTEMPTY => {
                Some("target already exists; it appeared after the collision check")
            }
            libc::EBUSY => Some("resource busy; close programs holding the file open"),
            libc::ENAMETOOLONG => Some("new name is too long for this filesystem"),
            libc::EINVAL => Some("invalid name for this filesystem"),
            libc::EXDEV => Some("cross-device rename; source and target are on different mounts"),
            libc::ELOOP => Some("too many symbolic link levels"),
            _ => None,
        }
    }
    #[cfg(windows)]
    {
        match code {
            5 => Some("access denied; check permissions or whether the file is read-only"), // ERROR_ACCESS_DENIED
            32 | 33 => Some("file is in use by another process"), // SHARING / LOCK violation
            2 | 3 => Some("path not found; the file may have been moved by another process"),
            80 | 183 => Some("target already exists; it appeared after the collision check"),
            123 => Some("new name contains characters this filesystem does not allow"), // ERROR_INVALID_NAME
            206 => Some("name or path too long (MAX_PATH exceeded)"),
            19 => Some("write-protected media"),
            _ => None,
        }
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = code;
        None
    }
}

/// Hint keyed on the portable ErrorKind, used when no OS code is available.
fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => {
            Some("permission denied; the directory must be writable to rename its entries")
        }
        io::ErrorKind::NotFound => {
            Some("path not found; the file may have been moved by another process")
        }
        io::ErrorKind::AlreadyExists => {
            Some("target already exists; it appeared after the collision check")
        }
        _ => None,
    }
}

/// Format "<op> '<path>': <error> — <hint> [os code: N]".
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    let hint = match e.raw_os_error() {
        Some(code) => os_hint(code),
        None => kind_hint(e.kind()),
    };
    if let Some(h) = hint {
        msg.push_str(" — ");
        msg.push_str(h);
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_only_error_gets_kind_hint_and_no_code() {
        let msg = describe_io_error(
            "rename",
            Path::new("/x/a.txt"),
            &io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(msg.starts_with("rename '/x/a.txt'"));
        assert!(msg.contains("moved by another process"));
        assert!(!msg.contains("os code"));
    }

    #[test]
    fn unknown_kind_has_no_hint() {
        let msg = describe_io_error("rename", Path::new("a"), &io::Error::other("boom"));
        assert_eq!(msg, "rename 'a': boom");
    }
}
