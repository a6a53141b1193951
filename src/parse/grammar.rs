//! Per-line grammar.
//!
//! Each line is an ordered choice: an assignment (`KEY = value`) or, failing
//! that, an unmatched line captured verbatim. The second alternative always
//! succeeds, so every line produces a result.

use once_cell::sync::Lazy;
use regex::Regex;

use super::escape::expand_escapes;

/// Leading whitespace, key, `=`, then the raw value text.
///
/// Horizontal whitespace covers tab, every Unicode space separator and the
/// zero-width no-break space left behind by a byte-order mark.
static ASSIGNMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\t\p{Zs}\x{FEFF}]*([A-Za-z0-9_.-]+)[\t\p{Zs}]*=[\t\p{Zs}]*(.*)$")
        .expect("valid regex")
});

static DOUBLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^"((?:\\.|[^"\\])*)""#).expect("valid regex"));

static SINGLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^'((?:\\.|[^'\\])*)'"#).expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Assignment { key: String, value: String, line_number: usize },
    Unmatched { content: String, line_number: usize },
}

impl ParsedLine {
    pub fn line_number(&self) -> usize {
        match self {
            ParsedLine::Assignment { line_number, .. } | ParsedLine::Unmatched { line_number, .. } => {
                *line_number
            }
        }
    }
}

/// Split `source` on `\n` and parse every non-blank line, in source order.
pub fn parse_lines(source: &str) -> Vec<ParsedLine> {
    source
        .split('\n')
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(line, idx + 1))
        .collect()
}

/// Parse a single non-blank line.
pub fn parse_line(line: &str, line_number: usize) -> ParsedLine {
    match assignment(line) {
        Some((key, value)) => ParsedLine::Assignment { key, value, line_number },
        None => ParsedLine::Unmatched { content: line.to_string(), line_number },
    }
}

fn assignment(line: &str) -> Option<(String, String)> {
    let caps = ASSIGNMENT.captures(line)?;
    let key = caps.get(1)?.as_str();
    let raw = caps.get(2).map_or("", |m| m.as_str());
    let value = value(raw)?;
    Some((key.to_string(), value))
}

/// Ordered choice over the value forms.
///
/// A quoted form that matches commits the line: anything other than
/// whitespace after the closing quote rejects the whole assignment instead
/// of falling back to the unquoted reading.
fn value(raw: &str) -> Option<String> {
    if let Some(caps) = DOUBLE_QUOTED.captures(raw) {
        let rest = &raw[caps.get(0)?.end()..];
        return rest.trim().is_empty().then(|| expand_escapes(&caps[1]));
    }
    if let Some(caps) = SINGLE_QUOTED.captures(raw) {
        let rest = &raw[caps.get(0)?.end()..];
        return rest.trim().is_empty().then(|| caps[1].to_string());
    }
    Some(raw.trim().to_string())
}
