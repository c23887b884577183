//! Config validation logic.
//! Checks the settings that can be verified before any file is touched.

use anyhow::{Result, bail};
use tracing::{debug, error};

use super::types::Config;

impl Config {
    /// Validate log file location and the folder-prefix separator.
    pub fn validate(&self) -> Result<()> {
        if let Some(log) = &self.log_file {
            if log.is_dir() {
                error!("log_file is a directory: {}", log.display());
                bail!("log_file is a directory: {}", log.display());
            }
        }

        if self
            .folder_prefix_separator
            .chars()
            .any(|c| c == '/' || c == '\\' || c == '\0')
        {
            bail!(
                "folder_prefix_separator must not contain path separators: '{}'",
                self.folder_prefix_separator
            );
        }

        debug!(
            log_level = %self.log_level,
            log_file = %self
                .log_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<none>".into()),
            dry_run = self.dry_run,
            "config validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_with_slash_rejected() {
        let cfg = Config {
            folder_prefix_separator: "a/b".into(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn directory_log_file_rejected() {
        let td = tempfile::tempdir().unwrap();
        let cfg = Config {
            log_file: Some(td.path().to_path_buf()),
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }
}
