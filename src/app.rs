//! Application orchestrator.
//! Loads/merges config, initializes logging, validates the directory, builds the
//! TransformMode from flags, and runs the executor with a console log sink.

use anyhow::{Result, anyhow};
use tracing::{debug, error, info};

use file_renamer::cli::{Args, folder_name_source, self_exclusion};
use file_renamer::output as out;
use file_renamer::rename_ops::validate_directory;
use file_renamer::{
    RenameExecutor, RenamerError, TransformMode, create_template_config, default_config_path,
    load_config,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Config location commands run before logging init.
    if args.print_config {
        let path = default_config_path()?;
        out::print_info(&format!("Config file location:\n  {}", path.display()));
        if path.exists() {
            out::print_info("A config file exists at that location.");
        } else {
            out::print_info("No config file there yet; defaults are used. Create one with --init-config.");
        }
        return Ok(());
    }
    if args.init_config {
        let path = default_config_path()?;
        create_template_config(&path)?;
        out::print_success(&format!("Template config written to {}", path.display()));
        return Ok(());
    }

    // XML values first, then CLI overrides (CLI wins).
    let mut cfg = load_config()?;
    args.apply_overrides(&mut cfg);
    cfg.validate()?;

    let guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        e
    })?;
    debug!("Starting file_renamer: {:?}", args);

    let result = (|| -> Result<()> {
        let requested = args
            .resolved_directory()
            .ok_or_else(|| anyhow!("a DIRECTORY argument is required"))?;
        let dir = validate_directory(&requested)?;
        let mode = args.build_mode(folder_name_source(&requested, &dir), &cfg)?;

        out::print_info(&format!("Directory: {}", dir.display()));
        if args.uses_folder_prefix() {
            if let TransformMode::AddPrefix(p) = &mode {
                out::print_info(&format!("Using folder-name prefix: {p}"));
            }
        }
        out::print_info(&format!(
            "Operation: {mode}{}",
            if cfg.dry_run { " (dry run)" } else { "" }
        ));

        let mut exec = RenameExecutor::new(&dir, mode).dry_run(cfg.dry_run);
        if matches!(exec.mode(), TransformMode::AddPrefix(_)) {
            if let Some(me) = self_exclusion(&dir) {
                debug!(name = %me, "excluding running executable");
                exec = exec.exclude(me);
            }
        }

        match exec.execute(out::print_log_line) {
            Ok(summary) => {
                info!(
                    dir = %dir.display(),
                    renamed = summary.renamed,
                    skipped = summary.skipped,
                    "Run completed"
                );
                Ok(())
            }
            Err(e) => {
                report_failure(&e);
                Err(e.into())
            }
        }
    })();

    // Flush buffered file logs before exit.
    drop(guard);
    result
}

fn report_failure(e: &RenamerError) {
    let code = e.code();
    match e {
        RenamerError::RenameFailed {
            from, to, summary, ..
        } => {
            error!(code, kind = "rename_failed", from = %from.display(), to = %to.display(), renamed = summary.renamed, "Run aborted");
            out::print_warn(&format!(
                "Stopped early: {} renamed, {} skipped before the failure. Completed renames are kept.",
                summary.renamed, summary.skipped
            ));
        }
        RenamerError::InvalidDirectory(path) => {
            error!(code, kind = "invalid_directory", path = %path.display(), "Run aborted")
        }
        RenamerError::EmptyPrefix => error!(code, kind = "empty_prefix", "Run aborted"),
        RenamerError::InvalidPrefix(prefix) => {
            error!(code, kind = "invalid_prefix", prefix = %prefix, "Run aborted")
        }
        RenamerError::MisplacedNumericSegment => {
            error!(code, kind = "misplaced_numeric_segment", "Run aborted")
        }
        RenamerError::ListFailed { dir, .. } => {
            error!(code, kind = "list_failed", dir = %dir.display(), "Run aborted")
        }
    }
}
