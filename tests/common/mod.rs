#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Create `name` in `dir` with `contents`.
pub fn touch(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture file");
}

/// Sorted file names in `dir`.
pub fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read_dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// True when `dir` lives on a filesystem that tells `probe` and `PROBE` apart.
pub fn is_case_sensitive(dir: &Path) -> bool {
    let probe = dir.join(".case_probe");
    fs::write(&probe, b"").expect("write probe");
    let sensitive = !dir.join(".CASE_PROBE").exists();
    fs::remove_file(&probe).expect("remove probe");
    sensitive
}

/// Sink that records every line, for asserting on the log contract.
#[derive(Default)]
pub struct LogSink {
    pub lines: Vec<String>,
}

impl LogSink {
    pub fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// Outcome lines (everything before the closing block), sorted.
    pub fn outcome_lines_sorted(&self) -> Vec<String> {
        let end = self.lines.len().saturating_sub(4);
        let mut v = self.lines[..end].to_vec();
        v.sort();
        v
    }

    /// The last four lines: blank, "Finished.", renamed count, skipped count.
    pub fn closing(&self) -> Vec<String> {
        let start = self.lines.len().saturating_sub(4);
        self.lines[start..].to_vec()
    }
}
