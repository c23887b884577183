//! Rename execution: directory listing, collision checks, and the rename itself.

mod atomic;
mod executor;
mod helpers;
mod namespace;
mod outcome;
mod util;

pub use atomic::{rename_atomic, rename_case_only};
pub use executor::{list_directory, run, validate_directory, DirectoryEntry, RenameExecutor};
pub use helpers::describe_io_error;
pub use outcome::{RenameOutcome, RenameSummary};
pub use util::TEMP_SUFFIX;
