//! Config module.
//! Provides configuration types, default paths, XML loading/template creation, and validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{CONFIG_ENV, default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{create_template_config, load_config, load_config_from_xml_path};

/// Separator appended to a folder-derived prefix when none is configured.
pub const FOLDER_PREFIX_SEPARATOR_DEFAULT: &str = "_";
