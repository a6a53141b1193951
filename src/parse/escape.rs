//! Escape expansion for double-quoted values.

/// Expand two-character escapes: `\n` and `\r` become control characters,
/// any other `\X` becomes `X`.
pub fn expand_escapes(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            // A lone trailing backslash cannot come out of the grammar.
            None => out.push('\\'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newline_and_carriage_return() {
        assert_eq!(expand_escapes(r"a\nb\rc"), "a\nb\rc");
    }

    #[test]
    fn test_other_escapes_drop_backslash() {
        assert_eq!(expand_escapes(r#"\"\t\\\$"#), "\"t\\$");
    }

    #[test]
    fn test_no_escapes_is_unchanged() {
        assert_eq!(expand_escapes("plain text"), "plain text");
    }

    #[test]
    fn test_trailing_backslash_is_kept() {
        assert_eq!(expand_escapes("end\\"), "end\\");
    }
}
