//! Literal prefix add/strip.

/// `prefix + name`, or None when `name` already starts with `prefix`.
pub fn add_prefix(name: &str, prefix: &str) -> Option<String> {
    if name.starts_with(prefix) {
        return None;
    }
    let mut out = String::with_capacity(prefix.len() + name.len());
    out.push_str(prefix);
    out.push_str(name);
    Some(out)
}

/// Strip one leading `prefix` from `name`.
///
/// With `numeric_segment = Some(n)` the prefix must be followed by exactly `n`
/// ASCII digits and a `_`; the whole run is stripped. Returns None when there is
/// no leading match or nothing would be left of the name.
pub fn strip_prefix<'a>(name: &'a str, prefix: &str, numeric_segment: Option<usize>) -> Option<&'a str> {
    let mut rest = name.strip_prefix(prefix)?;

    if let Some(width) = numeric_segment {
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits < width {
            return None;
        }
        // Exactly `width` digits, then the separator (a longer digit run has a digit here).
        rest = rest[width..].strip_prefix('_')?;
    }

    if rest.is_empty() { None } else { Some(rest) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_verbatim_concatenation() {
        assert_eq!(add_prefix("a.txt", "x_").as_deref(), Some("x_a.txt"));
        assert_eq!(add_prefix("x_a.txt", "x_"), None);
        // Prefix check is case-sensitive.
        assert_eq!(add_prefix("X_a.txt", "x_").as_deref(), Some("x_X_a.txt"));
    }

    #[test]
    fn strip_only_leading_single_occurrence() {
        assert_eq!(strip_prefix("x_x_a.txt", "x_", None), Some("x_a.txt"));
        assert_eq!(strip_prefix("a_x_.txt", "x_", None), None);
    }

    #[test]
    fn strip_treats_prefix_literally() {
        assert_eq!(strip_prefix("[v1.0] song.mp3", "[v1.0] ", None), Some("song.mp3"));
        assert_eq!(strip_prefix("av1x0 song.mp3", "a.1.0", None), None);
        assert_eq!(strip_prefix("a+b.txt", "a+", None), Some("b.txt"));
    }

    #[test]
    fn strip_with_numeric_segment() {
        let name = "Koikatu_F_20230101123456789_chika.png";
        assert_eq!(strip_prefix(name, "Koikatu_F_", Some(17)), Some("chika.png"));
        // Too few digits.
        assert_eq!(strip_prefix("Koikatu_F_2023_chika.png", "Koikatu_F_", Some(17)), None);
        // Too many digits.
        assert_eq!(
            strip_prefix("Koikatu_F_202301011234567890_chika.png", "Koikatu_F_", Some(17)),
            None
        );
        // Missing separator.
        assert_eq!(strip_prefix("Koikatu_F_20230101123456789chika.png", "Koikatu_F_", Some(17)), None);
    }
}
