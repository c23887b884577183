//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked ancestors for safety.

use anyhow::{Context, Result, anyhow};
use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FILE_RENAMER_CONFIG";

const APP_DIR: &str = "file_renamer";

/// Config file path: `$FILE_RENAMER_CONFIG` (relative values resolved against
/// the current directory) or the OS config dir.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        let p = PathBuf::from(p);
        if p.is_absolute() {
            return Ok(p);
        }
        let cwd = env::current_dir().context("resolve current directory for relative config path")?;
        return Ok(cwd.join(p));
    }

    config_dir()
        .map(|base| base.join(APP_DIR).join("config.xml"))
        .ok_or_else(|| anyhow!("no config directory available on this platform"))
}

/// OS-appropriate log file path under the data dir. Does not create anything.
pub fn default_log_path() -> Result<PathBuf> {
    data_dir()
        .map(|base| base.join(APP_DIR).join("file_renamer.log"))
        .ok_or_else(|| anyhow!("no data directory available on this platform"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        match fs::symlink_metadata(anc) {
            Ok(meta) if meta.file_type().is_symlink() => return Ok(true),
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        p = anc.parent();
    }
    Ok(false)
}
