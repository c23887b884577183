//! The directory as seen by the executor while it decides and performs renames.
//! `LiveDir` queries and mutates the real filesystem; `SimulatedDir` tracks names
//! in memory for dry runs.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

use super::atomic::{rename_atomic, rename_case_only};
use super::util::occupied;
use super::DirectoryEntry;

/// What sits at a candidate name right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Occupant {
    Vacant,
    /// The name resolves to the original entry itself through a case-insensitive lookup.
    CaseVariantOfSelf,
    Taken,
}

pub(super) trait Namespace {
    /// Inspect `candidate` for the entry currently named `original`.
    /// `case_fold` enables the case-only special case (capitalize mode).
    fn occupant(&self, original: &str, candidate: &str, case_fold: bool) -> Occupant;

    fn rename(&mut self, original: &str, candidate: &str, case_only: bool) -> io::Result<()>;
}

pub(super) struct LiveDir<'a> {
    dir: &'a Path,
}

impl<'a> LiveDir<'a> {
    pub(super) fn new(dir: &'a Path) -> Self {
        Self { dir }
    }

    /// True if a listing of the directory has an entry spelled exactly `name`.
    /// Unreadable listings count as a hit so the caller never overwrites.
    fn has_exact_entry(&self, name: &str) -> bool {
        match fs::read_dir(self.dir) {
            Ok(rd) => rd.filter_map(Result::ok).any(|e| e.file_name() == name),
            Err(_) => true,
        }
    }
}

impl Namespace for LiveDir<'_> {
    fn occupant(&self, original: &str, candidate: &str, case_fold: bool) -> Occupant {
        if !occupied(&self.dir.join(candidate)) {
            return Occupant::Vacant;
        }
        if case_fold && candidate.eq_ignore_ascii_case(original) && !self.has_exact_entry(candidate) {
            Occupant::CaseVariantOfSelf
        } else {
            Occupant::Taken
        }
    }

    fn rename(&mut self, original: &str, candidate: &str, case_only: bool) -> io::Result<()> {
        let from = self.dir.join(original);
        let to = self.dir.join(candidate);
        if case_only {
            rename_case_only(&from, &to)
        } else {
            rename_atomic(&from, &to)
        }
    }
}

/// In-memory view for dry runs: starts from the listing and applies planned renames.
pub(super) struct SimulatedDir {
    names: HashSet<String>,
}

impl SimulatedDir {
    pub(super) fn from_entries(entries: &[DirectoryEntry]) -> Self {
        Self {
            names: entries.iter().map(|e| e.name.clone()).collect(),
        }
    }
}

impl Namespace for SimulatedDir {
    fn occupant(&self, _original: &str, candidate: &str, _case_fold: bool) -> Occupant {
        if self.names.contains(candidate) {
            Occupant::Taken
        } else {
            Occupant::Vacant
        }
    }

    fn rename(&mut self, original: &str, candidate: &str, _case_only: bool) -> io::Result<()> {
        self.names.remove(original);
        self.names.insert(candidate.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> DirectoryEntry {
        DirectoryEntry { name: name.into(), is_file: true }
    }

    #[test]
    fn simulated_tracks_planned_renames() {
        let mut ns = SimulatedDir::from_entries(&[entry("a.txt"), entry("b.txt")]);
        assert_eq!(ns.occupant("a.txt", "b.txt", false), Occupant::Taken);
        ns.rename("a.txt", "x_a.txt", false).unwrap();
        assert_eq!(ns.occupant("c.txt", "x_a.txt", false), Occupant::Taken);
        assert_eq!(ns.occupant("b.txt", "a.txt", false), Occupant::Vacant);
    }

    #[test]
    fn live_distinct_case_variant_is_taken() {
        let td = tempfile::tempdir().unwrap();
        fs::write(td.path().join("probe"), b"").unwrap();
        if td.path().join("PROBE").exists() {
            eprintln!("skipping: case-insensitive filesystem");
            return;
        }
        fs::write(td.path().join("foo.txt"), b"1").unwrap();
        fs::write(td.path().join("Foo.txt"), b"2").unwrap();
        let ns = LiveDir::new(td.path());
        assert_eq!(ns.occupant("foo.txt", "Foo.txt", true), Occupant::Taken);
        assert_eq!(ns.occupant("foo.txt", "FOO.txt", true), Occupant::Vacant);
    }
}
