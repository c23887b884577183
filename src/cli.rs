//! CLI definition and parsing.
//! Defines Args plus the front-end policies that turn flags into a TransformMode.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - add-prefix without --prefix derives the prefix from the directory name.

use clap::{Parser, ValueEnum, ValueHint};
use std::path::{Path, PathBuf};

use crate::config::types::{Config, LogLevel};
use crate::errors::RenamerError;
use crate::transform::TransformMode;

/// Which rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ModeArg {
    /// Capitalize the first letter of each word, lower-case the rest
    #[default]
    Capitalize,
    /// Prepend a prefix to every file name
    AddPrefix,
    /// Strip a leading prefix from file names
    RemovePrefix,
}

/// Batch-rename the files of one directory.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Batch-rename files: smart capitalize, add prefix, remove prefix"
)]
pub struct Args {
    /// Directory whose files are renamed (not recursive).
    #[arg(
        value_name = "DIRECTORY",
        value_hint = ValueHint::DirPath,
        required_unless_present_any = ["print_config", "init_config"]
    )]
    pub directory: Option<PathBuf>,

    /// Rename rule.
    #[arg(short = 'm', long, value_enum, default_value_t = ModeArg::Capitalize)]
    pub mode: ModeArg,

    /// Prefix to add or remove. For add-prefix, defaults to the folder name (spaces removed) plus a separator.
    #[arg(short = 'p', long, value_name = "TEXT")]
    pub prefix: Option<String>,

    /// remove-prefix only: the prefix must be followed by exactly N digits and '_', all stripped together.
    #[arg(long, value_name = "N")]
    pub numeric_segment: Option<usize>,

    /// Dry-run: log what would be renamed, but do not touch any file.
    #[arg(long, help = "Show what would be renamed, but do not rename anything")]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also write diagnostics to this file.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit diagnostics in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where the config file is looked up, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,

    /// Write a template config file at the config location, then exit.
    #[arg(long, help = "Write a template config file and exit")]
    pub init_config: bool,
}

impl Args {
    /// Target directory with shell-quoting leftovers removed.
    pub fn resolved_directory(&self) -> Option<PathBuf> {
        self.directory.as_deref().map(sanitize_path)
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
    }

    /// Build the TransformMode. `directory` only feeds the folder-name prefix.
    pub fn build_mode(&self, directory: &Path, cfg: &Config) -> Result<TransformMode, RenamerError> {
        if self.numeric_segment.is_some() && self.mode != ModeArg::RemovePrefix {
            return Err(RenamerError::MisplacedNumericSegment);
        }
        let given = self.prefix.as_deref().filter(|p| !p.is_empty());
        let mode = match self.mode {
            ModeArg::Capitalize => TransformMode::Capitalize,
            ModeArg::AddPrefix => match given {
                Some(p) => TransformMode::AddPrefix(p.to_string()),
                None => folder_prefix(directory, &cfg.folder_prefix_separator)
                    .map(TransformMode::AddPrefix)
                    .ok_or(RenamerError::EmptyPrefix)?,
            },
            ModeArg::RemovePrefix => TransformMode::RemovePrefix {
                prefix: given.ok_or(RenamerError::EmptyPrefix)?.to_string(),
                numeric_segment: self.numeric_segment,
            },
        };
        mode.validate()?;
        Ok(mode)
    }

    /// True when add-prefix is about to fall back to the folder-name prefix.
    pub fn uses_folder_prefix(&self) -> bool {
        self.mode == ModeArg::AddPrefix && self.prefix.as_deref().is_none_or(str::is_empty)
    }
}

/// Folder name with spaces removed, plus `separator`. None if nothing is left.
pub fn folder_prefix(directory: &Path, separator: &str) -> Option<String> {
    let name = directory.file_name()?.to_str()?;
    let compact: String = name.chars().filter(|c| *c != ' ').collect();
    if compact.is_empty() {
        None
    } else {
        Some(compact + separator)
    }
}

/// Directory whose name the folder-name prefix is taken from: the path as the
/// user typed it, unless it has no final name component (".", "music/..").
/// A symlink therefore lends its own name, not its target's.
pub fn folder_name_source<'a>(given: &'a Path, canonical: &'a Path) -> &'a Path {
    if given.file_name().is_some() { given } else { canonical }
}

/// File name of the running executable when it lives in `directory`.
pub fn self_exclusion(directory: &Path) -> Option<String> {
    let exe = std::env::current_exe().ok()?;
    let exe_dir = dunce::canonicalize(exe.parent()?).ok()?;
    let dir = dunce::canonicalize(directory).ok()?;
    if exe_dir == dir {
        exe.file_name()?.to_str().map(str::to_string)
    } else {
        None
    }
}

// Trim surrounding quotes and one trailing separator left behind by
// PowerShell/CMD quoting (e.g. 'C:\Music\').
fn sanitize_path(p: &Path) -> PathBuf {
    let raw = p.to_string_lossy();
    let trimmed = raw.trim();
    let mut inner = if trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
    {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.trim_matches(|c| c == '\'' || c == '"').to_string()
    };

    if (inner.ends_with('\\') || inner.ends_with('/')) && inner.len() > 1 && !inner.ends_with(":\\") {
        inner.pop();
    }
    PathBuf::from(inner)
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_prefix_strips_spaces() {
        assert_eq!(
            folder_prefix(Path::new("/media/Summer Trip 2024"), "_").as_deref(),
            Some("SummerTrip2024_")
        );
        assert_eq!(folder_prefix(Path::new("/"), "_"), None);
        assert_eq!(folder_prefix(Path::new("/tmp/   "), "_"), None);
    }

    #[test]
    fn folder_name_comes_from_given_path() {
        let canonical = Path::new("/data/2024-07");
        assert_eq!(
            folder_name_source(Path::new("/home/me/Summer Trip"), canonical),
            Path::new("/home/me/Summer Trip")
        );
        assert_eq!(folder_name_source(Path::new("."), canonical), canonical);
        assert_eq!(folder_name_source(Path::new("music/.."), canonical), canonical);
    }

    #[test]
    fn sanitize_removes_quotes_and_trailing_slash() {
        assert_eq!(sanitize_path(Path::new("'/tmp/music/'")), PathBuf::from("/tmp/music"));
        assert_eq!(sanitize_path(Path::new("\"/tmp/a b\"")), PathBuf::from("/tmp/a b"));
        assert_eq!(sanitize_path(Path::new("/")), PathBuf::from("/"));
    }
}
