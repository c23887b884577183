//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a commented template on request.
//!
//! Notes:
//! - Unknown XML fields are a hard error so misspelled settings are not silently ignored.
//! - A missing file at the default location means "use defaults"; a missing file named
//!   by FILE_RENAMER_CONFIG is an error.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{CONFIG_ENV, default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use super::FOLDER_PREFIX_SEPARATOR_DEFAULT;

use crate::platform::{set_dir_mode_0700, set_file_mode_0600, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    #[serde(default, deserialize_with = "de_bool_trimmed_opt")]
    dry_run: Option<bool>,
    folder_prefix_separator: Option<String>,
}

// Accept " true " / "FALSE" etc.; anything unparsable is treated as unset.
fn de_bool_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }))
}

fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(level) = parsed.log_level.as_deref().and_then(LogLevel::parse) {
        cfg.log_level = level;
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }
    if let Some(dry) = parsed.dry_run {
        cfg.dry_run = dry;
    }
    if let Some(sep) = parsed.folder_prefix_separator {
        cfg.folder_prefix_separator = sep.trim().to_string();
    }
    cfg
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig =
        from_xml_str(&contents).with_context(|| format!("parse config xml '{}'", path.display()))?;
    debug!(path = %path.display(), "loaded config xml");
    Ok(xml_to_config(parsed))
}

/// Load the effective file config: FILE_RENAMER_CONFIG, else the default path, else defaults.
pub fn load_config() -> Result<Config> {
    let explicit = env::var_os(CONFIG_ENV).is_some();
    let path = match default_config_path() {
        Ok(p) => p,
        Err(e) if !explicit => {
            debug!(error = %e, "no default config location; using defaults");
            return Ok(Config::default());
        }
        Err(e) => return Err(e),
    };

    if !path.exists() {
        if explicit {
            bail!("{CONFIG_ENV} points to a missing file: {}", path.display());
        }
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(Config::default());
    }
    load_config_from_xml_path(&path)
}

/// Write a commented template config at `path`.
/// Refuses to overwrite an existing file or to write below a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
        let _ = set_dir_mode_0700(parent);
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "/path/to/file_renamer.log".into());

    let content = format!(
        "<!--\n  file_renamer configuration (XML)\n\n    log_level                -> quiet | normal | info | debug\n    log_file                 -> path to a log file (optional; leave empty to log to the console only)\n                                e.g. {suggested_log}\n    dry_run                  -> true to only report what would be renamed\n    folder_prefix_separator  -> appended to the folder name when add-prefix runs without --prefix\n\n  CLI flags override these values.\n-->\n<config>\n  <log_level>normal</log_level>\n  <log_file></log_file>\n  <dry_run>false</dry_run>\n  <folder_prefix_separator>{FOLDER_PREFIX_SEPARATOR_DEFAULT}</folder_prefix_separator>\n</config>\n"
    );

    write_config_secure_new_0600(path, content.as_bytes())?;
    let _ = set_file_mode_0600(path);

    info!("Created template config at {}", path.display());
    Ok(())
}
