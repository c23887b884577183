//! Per-entry outcomes and the run summary.

use std::fmt;

/// What happened to one directory entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { from: String, to: String },
    SkippedUnchanged { name: String },
    SkippedCollision { name: String, target: String },
    SkippedAlreadyHasPrefix { name: String },
}

impl RenameOutcome {
    /// The sink line for this outcome. Unchanged entries are silent.
    ///
    /// `dry_run` only changes the wording of the `Renamed` line.
    pub fn log_line(&self, dry_run: bool) -> Option<String> {
        match self {
            RenameOutcome::Renamed { from, to } if dry_run => {
                Some(format!("Would rename: {from} -> {to}"))
            }
            RenameOutcome::Renamed { from, to } => Some(format!("Renamed: {from} -> {to}")),
            RenameOutcome::SkippedUnchanged { .. } => None,
            RenameOutcome::SkippedCollision { target, .. } => {
                Some(format!("Skipped (already exists): {target}"))
            }
            RenameOutcome::SkippedAlreadyHasPrefix { name } => {
                Some(format!("Skipped (already has prefix): {name}"))
            }
        }
    }
}

/// Counts plus the ordered outcomes of one run.
///
/// `skipped` counts collisions and already-prefixed names only; unchanged
/// entries are recorded but not counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: usize,
    pub skipped: usize,
    pub outcomes: Vec<RenameOutcome>,
}

impl RenameSummary {
    pub(crate) fn record(&mut self, outcome: RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed { .. } => self.renamed += 1,
            RenameOutcome::SkippedCollision { .. } | RenameOutcome::SkippedAlreadyHasPrefix { .. } => {
                self.skipped += 1
            }
            RenameOutcome::SkippedUnchanged { .. } => {}
        }
        self.outcomes.push(outcome);
    }

    /// Entries whose name the rule left as it was.
    pub fn unchanged(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::SkippedUnchanged { .. }))
            .count()
    }

    /// Closing lines: a blank line, `Finished.`, then the two counts.
    pub fn closing_lines(&self) -> [String; 4] {
        [
            String::new(),
            "Finished.".to_string(),
            format!("Renamed: {}", self.renamed),
            format!("Skipped: {}", self.skipped),
        ]
    }
}

impl fmt::Display for RenameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "renamed {}, skipped {}", self.renamed, self.skipped)
    }
}
