//! Shared helpers.

pub mod encoding;

pub use encoding::{read_text, AUTO_DETECT};
