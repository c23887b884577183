#![cfg(unix)]

mod common;

use common::{LogSink, listing, touch};
use file_renamer::{RenamerError, TransformMode, run};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::tempdir;

/// A non-writable directory makes the first rename fail; the run aborts with the
/// partial summary and no closing lines.
#[test]
fn rename_in_readonly_directory_aborts_with_partial_summary() {
    // Root bypasses directory permission checks.
    unsafe {
        if libc::geteuid() == 0 {
            eprintln!("skipping: running as root");
            return;
        }
    }

    let td = tempdir().unwrap();
    let dir = td.path().join("locked");
    fs::create_dir(&dir).unwrap();
    touch(&dir, "Fine.txt", "");
    touch(&dir, "needs caps.txt", "");
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).unwrap();

    let mut sink = LogSink::default();
    let result = run(&dir, &TransformMode::Capitalize, None, |l| sink.push(l));

    fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.expect_err("rename should fail in a read-only directory");
    assert_eq!(err.code(), 5);
    let summary = err.partial_summary().expect("partial summary");
    assert_eq!(summary.renamed, 0);
    match &err {
        RenamerError::RenameFailed { from, to, source, .. } => {
            assert_eq!(from.file_name().unwrap(), "needs caps.txt");
            assert_eq!(to.file_name().unwrap(), "Needs Caps.txt");
            assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let msg = err.to_string();
    assert!(msg.contains("permission denied"), "msg was: {msg}");
    assert!(msg.contains("[os code: 13]"), "msg was: {msg}");

    assert!(!sink.lines.iter().any(|l| l == "Finished."));
    assert_eq!(listing(&dir), vec!["Fine.txt", "needs caps.txt"]);
}
