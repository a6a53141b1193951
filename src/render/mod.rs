//! Output rendering (`.env` text, JSON)

pub mod dotenv;

pub use dotenv::{quote_value, render_dotenv};

use crate::parse::EnvMap;

/// Render a parsed map as a pretty-printed JSON object.
pub fn render_json(map: &EnvMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(map)
}
