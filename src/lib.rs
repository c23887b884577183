//! Core library for `file_renamer`.
//!
//! Batch-renames the regular files of one directory with one of three rules:
//! smart capitalisation, prefix addition, or prefix removal.
//!
//! - `transform` maps a single name to a candidate name (pure).
//! - `rename_ops` runs a whole directory: collision checks, the two-step
//!   case-only rename, and the per-entry outcome log.
//! - `config`, `cli`, `output` and `platform` support the binary front end.
//!
//! ```no_run
//! use file_renamer::{run, TransformMode};
//! use std::path::Path;
//!
//! let summary = run(Path::new("/music"), &TransformMode::Capitalize, None, |line| {
//!     println!("{line}");
//! })?;
//! assert_eq!(summary.renamed + summary.skipped, summary.outcomes.len() - summary.unchanged());
//! # Ok::<(), file_renamer::RenamerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod platform;
pub mod rename_ops;
pub mod transform;

pub use config::{
    Config, LogLevel, create_template_config, default_config_path, default_log_path,
    load_config, load_config_from_xml_path, path_has_symlink_ancestor,
};
pub use errors::RenamerError;
pub use rename_ops::{RenameExecutor, RenameOutcome, RenameSummary, run};
pub use transform::{Transform, TransformMode, smart_capitalize, transform_name};
