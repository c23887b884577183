//! Smart capitalisation.
//! A word is a maximal run of ASCII letters; everything else passes through untouched.

/// Split `name` into (base, extension) at the last `.`.
///
/// The extension keeps its leading dot. Leading dots belong to the base, so
/// dotfiles such as `.bashrc` have no extension, while `.config.bak` splits
/// into `.config` and `.bak`.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].bytes().any(|b| b != b'.') => name.split_at(idx),
        _ => (name, ""),
    }
}

/// Upper-case the first letter and lower-case the rest of every ASCII-letter run.
pub fn smart_capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            if in_word {
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c.to_ascii_uppercase());
                in_word = true;
            }
        } else {
            in_word = false;
            out.push(c);
        }
    }
    out
}
