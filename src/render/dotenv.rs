//! `.env` rendering.
//!
//! Output parses back to the same map: values that the unquoted form would
//! alter are double-quoted and escaped.

use crate::parse::EnvMap;

pub fn render_dotenv(map: &EnvMap) -> String {
    let mut out = String::new();
    for (key, value) in map {
        out.push_str(key);
        out.push('=');
        out.push_str(&quote_value(value));
        out.push('\n');
    }
    out
}

/// Quote `value` if writing it bare would not read back unchanged.
pub fn quote_value(value: &str) -> String {
    if !needs_quotes(value) {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}

fn needs_quotes(value: &str) -> bool {
    value.trim() != value
        || value.contains(['\n', '\r'])
        || value.starts_with(['"', '\''])
}
