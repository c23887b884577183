//! Rename executor.
//! Lists the directory once, classifies each regular file through the transformer,
//! re-checks the candidate name right before acting, and renames.
//!
//! Notes:
//! - Listing order is whatever the filesystem returns; no sorting.
//! - The first failed rename aborts the run; earlier renames are kept.
//! - No lock is held on the directory; concurrent external changes are not detected.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::errors::RenamerError;
use crate::transform::{transform_name, Transform, TransformMode};

use super::helpers::describe_io_error;
use super::namespace::{LiveDir, Namespace, Occupant, SimulatedDir};
use super::outcome::{RenameOutcome, RenameSummary};

/// One name from the directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    /// Regular file (symlinks are followed). Everything else is left alone.
    pub is_file: bool,
}

/// Check that `dir` is an existing directory and return its canonical form.
pub fn validate_directory(dir: &Path) -> Result<PathBuf, RenamerError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {
            dunce::canonicalize(dir).map_err(|_| RenamerError::InvalidDirectory(dir.to_path_buf()))
        }
        _ => Err(RenamerError::InvalidDirectory(dir.to_path_buf())),
    }
}

/// Read the directory once. Names that are not valid UTF-8 are skipped.
pub fn list_directory(dir: &Path) -> Result<Vec<DirectoryEntry>, RenamerError> {
    let list_err = |source| RenamerError::ListFailed {
        dir: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for item in fs::read_dir(dir).map_err(list_err)? {
        let item = item.map_err(list_err)?;
        let name = match item.file_name().into_string() {
            Ok(n) => n,
            Err(raw) => {
                warn!(name = ?raw, "skipping entry with a non UTF-8 name");
                continue;
            }
        };
        let is_file = fs::metadata(item.path()).map(|m| m.is_file()).unwrap_or(false);
        entries.push(DirectoryEntry { name, is_file });
    }
    Ok(entries)
}

/// Renames every regular file in one directory according to one mode.
#[derive(Debug, Clone)]
pub struct RenameExecutor {
    directory: PathBuf,
    mode: TransformMode,
    exclude_name: Option<String>,
    dry_run: bool,
}

impl RenameExecutor {
    pub fn new(directory: impl Into<PathBuf>, mode: TransformMode) -> Self {
        Self {
            directory: directory.into(),
            mode,
            exclude_name: None,
            dry_run: false,
        }
    }

    /// Name to leave alone in add-prefix mode (e.g. the running program itself).
    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.exclude_name = Some(name.into());
        self
    }

    /// Classify and log without touching the filesystem.
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    pub fn mode(&self) -> &TransformMode {
        &self.mode
    }

    /// Run over the directory, sending one line per logged outcome to `on_log`,
    /// followed by the closing summary lines.
    pub fn execute<F>(&self, mut on_log: F) -> Result<RenameSummary, RenamerError>
    where
        F: FnMut(&str),
    {
        self.mode.validate()?;
        let dir = validate_directory(&self.directory)?;
        let entries = list_directory(&dir)?;

        info!(
            dir = %dir.display(),
            mode = %self.mode,
            entries = entries.len(),
            dry_run = self.dry_run,
            "Starting rename run"
        );

        let summary = if self.dry_run {
            let mut ns = SimulatedDir::from_entries(&entries);
            self.process(&dir, &entries, &mut ns, &mut on_log)?
        } else {
            let mut ns = LiveDir::new(&dir);
            self.process(&dir, &entries, &mut ns, &mut on_log)?
        };

        for line in summary.closing_lines() {
            on_log(&line);
        }
        info!(
            renamed = summary.renamed,
            skipped = summary.skipped,
            unchanged = summary.unchanged(),
            "Rename run finished"
        );
        Ok(summary)
    }

    fn process<N, F>(
        &self,
        dir: &Path,
        entries: &[DirectoryEntry],
        ns: &mut N,
        on_log: &mut F,
    ) -> Result<RenameSummary, RenamerError>
    where
        N: Namespace,
        F: FnMut(&str),
    {
        let mut summary = RenameSummary::default();

        for entry in entries.iter().filter(|e| e.is_file) {
            if self.is_excluded(&entry.name) {
                debug!(name = %entry.name, "excluded from add-prefix run");
                continue;
            }

            let outcome = match transform_name(&entry.name, &self.mode) {
                Transform::Unchanged => RenameOutcome::SkippedUnchanged {
                    name: entry.name.clone(),
                },
                Transform::AlreadyHasPrefix => RenameOutcome::SkippedAlreadyHasPrefix {
                    name: entry.name.clone(),
                },
                Transform::Rename(candidate) => {
                    match ns.occupant(&entry.name, &candidate, self.mode.is_capitalize()) {
                        Occupant::Taken => {
                            debug!(name = %entry.name, target = %candidate, "candidate name taken");
                            RenameOutcome::SkippedCollision {
                                name: entry.name.clone(),
                                target: candidate,
                            }
                        }
                        occ => {
                            let case_only = occ == Occupant::CaseVariantOfSelf;
                            if let Err(e) = ns.rename(&entry.name, &candidate, case_only) {
                                let from = dir.join(&entry.name);
                                let to = dir.join(&candidate);
                                let help = format!(
                                    "{} (target '{}')",
                                    describe_io_error("rename", &from, &e),
                                    to.display()
                                );
                                error!(
                                    from = %from.display(),
                                    to = %to.display(),
                                    renamed = summary.renamed,
                                    error = %e,
                                    "Rename failed; aborting run"
                                );
                                return Err(RenamerError::RenameFailed {
                                    from,
                                    to,
                                    help,
                                    source: e,
                                    summary: Box::new(summary),
                                });
                            }
                            debug!(from = %entry.name, to = %candidate, case_only, dry_run = self.dry_run, "renamed");
                            RenameOutcome::Renamed {
                                from: entry.name.clone(),
                                to: candidate,
                            }
                        }
                    }
                }
            };

            if let Some(line) = outcome.log_line(self.dry_run) {
                on_log(&line);
            }
            summary.record(outcome);
        }

        Ok(summary)
    }

    fn is_excluded(&self, name: &str) -> bool {
        matches!(self.mode, TransformMode::AddPrefix(_)) && self.exclude_name.as_deref() == Some(name)
    }
}

/// Run one batch: `directory`, `mode`, an optional name to leave out of add-prefix
/// runs, and a sink for the log lines.
pub fn run<F>(
    directory: &Path,
    mode: &TransformMode,
    exclude_name: Option<&str>,
    on_log: F,
) -> Result<RenameSummary, RenamerError>
where
    F: FnMut(&str),
{
    let mut exec = RenameExecutor::new(directory, mode.clone());
    if let Some(name) = exclude_name {
        exec = exec.exclude(name);
    }
    exec.execute(on_log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Reports every case-insensitive match of the original as the entry itself,
    /// as a case-insensitive filesystem would, and records the renames asked for.
    #[derive(Default)]
    struct CaseFoldingDir {
        renames: Vec<(String, String, bool)>,
    }

    impl Namespace for CaseFoldingDir {
        fn occupant(&self, original: &str, candidate: &str, case_fold: bool) -> Occupant {
            if case_fold && candidate.eq_ignore_ascii_case(original) {
                Occupant::CaseVariantOfSelf
            } else {
                Occupant::Vacant
            }
        }

        fn rename(&mut self, original: &str, candidate: &str, case_only: bool) -> io::Result<()> {
            self.renames.push((original.to_string(), candidate.to_string(), case_only));
            Ok(())
        }
    }

    fn file(name: &str) -> DirectoryEntry {
        DirectoryEntry { name: name.into(), is_file: true }
    }

    #[test]
    fn case_variant_of_self_takes_the_case_only_rename() {
        let exec = RenameExecutor::new("/music", TransformMode::Capitalize);
        let mut ns = CaseFoldingDir::default();
        let mut lines = Vec::new();

        let summary = exec
            .process(
                Path::new("/music"),
                &[file("photo.jpg"), file("my song.mp3")],
                &mut ns,
                &mut |l: &str| lines.push(l.to_string()),
            )
            .unwrap();

        assert_eq!(
            ns.renames,
            vec![
                ("photo.jpg".to_string(), "Photo.jpg".to_string(), true),
                ("my song.mp3".to_string(), "My Song.mp3".to_string(), true),
            ]
        );
        assert_eq!(summary.renamed, 2);
        assert_eq!(
            summary.outcomes[0],
            RenameOutcome::Renamed { from: "photo.jpg".into(), to: "Photo.jpg".into() }
        );
        assert_eq!(lines[0], "Renamed: photo.jpg -> Photo.jpg");
    }

    #[test]
    fn prefix_modes_never_take_the_case_only_rename() {
        let exec = RenameExecutor::new("/music", TransformMode::AddPrefix("x_".into()));
        let mut ns = CaseFoldingDir::default();

        exec.process(Path::new("/music"), &[file("a.txt")], &mut ns, &mut |_: &str| {})
            .unwrap();

        assert_eq!(ns.renames, vec![("a.txt".to_string(), "x_a.txt".to_string(), false)]);
    }
}
