//! `.env` text parsing
//!
//! Parsing runs in two passes: [`parse_lines`] turns source text into an
//! ordered list of per-line results, and [`reduce`] folds that list into the
//! final [`EnvMap`], reporting unmatched lines to a [`DiagnosticSink`].
//! Malformed input never fails; it only produces diagnostics.

pub mod escape;
pub mod grammar;

use std::collections::BTreeMap;

use crate::diagnostics::{debug_sink, Diagnostic, DiagnosticSink};

pub use escape::expand_escapes;
pub use grammar::{parse_line, parse_lines, ParsedLine};

/// Parsed keys and values. Keys are unique; later assignments win.
pub type EnvMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Log unmatched lines through `tracing`.
    pub debug: bool,
}

/// Parse `source` into a map, logging unmatched lines when `options.debug`.
pub fn parse(source: &str, options: &ParseOptions) -> EnvMap {
    let mut sink = debug_sink(options.debug);
    parse_with(source, sink.as_mut())
}

/// Parse `source` into a map, reporting unmatched lines to `sink`.
pub fn parse_with(source: &str, sink: &mut dyn DiagnosticSink) -> EnvMap {
    reduce(parse_lines(source), sink)
}

/// Fold per-line results into a map in source order.
pub fn reduce<I>(lines: I, sink: &mut dyn DiagnosticSink) -> EnvMap
where
    I: IntoIterator<Item = ParsedLine>,
{
    let mut map = EnvMap::new();
    for line in lines {
        match line {
            ParsedLine::Assignment { key, value, .. } => {
                map.insert(key, value);
            }
            ParsedLine::Unmatched { content, line_number } => {
                sink.report(Diagnostic::UnmatchedLine { line_number, content });
            }
        }
    }
    map
}
