//! Typed error definitions for file_renamer.
//! Every variant is fatal to the current run; collisions and no-op names are outcomes, not errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::rename_ops::RenameSummary;

#[derive(Debug, Error)]
pub enum RenamerError {
    #[error("Not an existing directory: {0}")]
    InvalidDirectory(PathBuf),

    #[error("Prefix must not be empty")]
    EmptyPrefix,

    /// The prefix would turn a file name into a path (separator or NUL inside it).
    #[error("Prefix must not contain '/', '\\' or NUL: {0:?}")]
    InvalidPrefix(String),

    #[error("A numeric segment only applies to remove-prefix")]
    MisplacedNumericSegment,

    #[error("Cannot list directory {dir}: {source}")]
    ListFailed {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A rename failed mid-run. Renames completed before it stay in place.
    #[error("{help}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        help: String,
        #[source]
        source: io::Error,
        summary: Box<RenameSummary>,
    },
}

impl RenamerError {
    /// Stable process exit code for this failure.
    pub fn code(&self) -> i32 {
        match self {
            RenamerError::InvalidDirectory(_) => 2,
            RenamerError::EmptyPrefix => 3,
            RenamerError::ListFailed { .. } => 4,
            RenamerError::RenameFailed { .. } => 5,
            RenamerError::InvalidPrefix(_) => 6,
            RenamerError::MisplacedNumericSegment => 7,
        }
    }

    /// Counts and outcomes accumulated before a rename failure.
    pub fn partial_summary(&self) -> Option<&RenameSummary> {
        match self {
            RenamerError::RenameFailed { summary, .. } => Some(&**summary),
            _ => None,
        }
    }
}
