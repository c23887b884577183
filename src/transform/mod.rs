//! Name transformation rules.
//! Pure functions: map one filename to a candidate new filename without touching the filesystem.
//!
//! Notes:
//! - Capitalize works on the base name only; the extension is kept verbatim.
//! - Prefix matching is literal (no pattern syntax in the prefix).

mod capitalize;
mod prefix;

pub use capitalize::{smart_capitalize, split_extension};
pub use prefix::{add_prefix, strip_prefix};

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use crate::errors::RenamerError;

/// Which rename rule a run applies. Chosen once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformMode {
    /// Smart title-casing of the base name.
    Capitalize,
    /// Prepend a literal prefix.
    AddPrefix(String),
    /// Strip one leading occurrence of a literal prefix.
    ///
    /// With `numeric_segment = Some(n)` the prefix must be followed by exactly
    /// `n` ASCII digits and an underscore, all of which are stripped together.
    RemovePrefix {
        prefix: String,
        numeric_segment: Option<usize>,
    },
}

impl TransformMode {
    /// Shorthand for a plain literal remove-prefix mode.
    pub fn remove_prefix(prefix: impl Into<String>) -> Self {
        TransformMode::RemovePrefix {
            prefix: prefix.into(),
            numeric_segment: None,
        }
    }

    /// Reject modes that cannot run: an empty prefix, or one that holds a path
    /// separator or NUL.
    pub fn validate(&self) -> Result<(), RenamerError> {
        match self {
            TransformMode::Capitalize => Ok(()),
            TransformMode::AddPrefix(p) | TransformMode::RemovePrefix { prefix: p, .. } => {
                if p.is_empty() {
                    Err(RenamerError::EmptyPrefix)
                } else if p.contains(['/', '\\', '\0']) {
                    Err(RenamerError::InvalidPrefix(p.clone()))
                } else {
                    Ok(())
                }
            }
        }
    }

    pub fn is_capitalize(&self) -> bool {
        matches!(self, TransformMode::Capitalize)
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformMode::Capitalize => f.write_str("capitalize"),
            TransformMode::AddPrefix(p) => write!(f, "add-prefix '{p}'"),
            TransformMode::RemovePrefix {
                prefix,
                numeric_segment: None,
            } => write!(f, "remove-prefix '{prefix}'"),
            TransformMode::RemovePrefix {
                prefix,
                numeric_segment: Some(n),
            } => write!(f, "remove-prefix '{prefix}' + {n} digits + '_'"),
        }
    }
}

/// Result of applying a mode to one filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transform {
    /// A different name was computed.
    Rename(String),
    /// The rule leaves the name as it is.
    Unchanged,
    /// AddPrefix only: the name already starts with the prefix.
    AlreadyHasPrefix,
}

/// Apply `mode` to `name`.
pub fn transform_name(name: &str, mode: &TransformMode) -> Transform {
    let candidate = match mode {
        TransformMode::Capitalize => {
            let (base, ext) = split_extension(name);
            let mut out = smart_capitalize(base);
            out.push_str(ext);
            out
        }
        TransformMode::AddPrefix(prefix) => match add_prefix(name, prefix) {
            Some(n) => n,
            None => return Transform::AlreadyHasPrefix,
        },
        TransformMode::RemovePrefix {
            prefix,
            numeric_segment,
        } => match strip_prefix(name, prefix, *numeric_segment) {
            Some(rest) => rest.to_string(),
            None => return Transform::Unchanged,
        },
    };

    // A candidate must stay a single entry of the same directory ("..", "x/y" never do).
    if candidate == name || !is_plain_file_name(&candidate) {
        Transform::Unchanged
    } else {
        Transform::Rename(candidate)
    }
}

fn is_plain_file_name(candidate: &str) -> bool {
    Path::new(candidate).file_name() == Some(OsStr::new(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_keeps_extension_verbatim() {
        assert_eq!(
            transform_name("BOB.TXT", &TransformMode::Capitalize),
            Transform::Rename("Bob.TXT".into())
        );
        assert_eq!(
            transform_name("Alice.txt", &TransformMode::Capitalize),
            Transform::Unchanged
        );
    }

    #[test]
    fn add_prefix_detects_existing_prefix() {
        let mode = TransformMode::AddPrefix("x_".into());
        assert_eq!(transform_name("x_a.txt", &mode), Transform::AlreadyHasPrefix);
        assert_eq!(
            transform_name("a.txt", &mode),
            Transform::Rename("x_a.txt".into())
        );
    }

    #[test]
    fn remove_prefix_without_match_is_unchanged() {
        let mode = TransformMode::remove_prefix("zzz_");
        assert_eq!(transform_name("a.txt", &mode), Transform::Unchanged);
    }

    #[test]
    fn remove_prefix_that_is_whole_name_is_unchanged() {
        // Stripping would leave an empty name; there is nothing to rename to.
        let mode = TransformMode::remove_prefix("a.txt");
        assert_eq!(transform_name("a.txt", &mode), Transform::Unchanged);
    }

    #[test]
    fn empty_prefix_rejected() {
        assert!(matches!(
            TransformMode::AddPrefix(String::new()).validate(),
            Err(RenamerError::EmptyPrefix)
        ));
        assert!(matches!(
            TransformMode::remove_prefix("").validate(),
            Err(RenamerError::EmptyPrefix)
        ));
        assert!(TransformMode::Capitalize.validate().is_ok());
    }

    #[test]
    fn prefix_with_separator_or_nul_rejected() {
        for p in ["../", "sub/", "a\\b", "x\0"] {
            assert!(
                matches!(
                    TransformMode::AddPrefix(p.into()).validate(),
                    Err(RenamerError::InvalidPrefix(ref got)) if got == p
                ),
                "prefix {p:?} should be rejected"
            );
        }
        assert!(matches!(
            TransformMode::remove_prefix("old/").validate(),
            Err(RenamerError::InvalidPrefix(_))
        ));
        assert!(TransformMode::AddPrefix("2024 - ".into()).validate().is_ok());
    }

    #[test]
    fn candidate_that_is_not_a_plain_name_is_unchanged() {
        // Stripping "x" from "x.." would leave the parent-directory name.
        assert_eq!(transform_name("x..", &TransformMode::remove_prefix("x")), Transform::Unchanged);
        assert_eq!(transform_name("x.", &TransformMode::remove_prefix("x")), Transform::Unchanged);
        assert_eq!(
            transform_name("x.a", &TransformMode::remove_prefix("x")),
            Transform::Rename(".a".into())
        );
    }
}
