//! Diagnostics raised while parsing and merging.
//!
//! Nothing here is fatal. Callers choose where diagnostics go by handing a
//! [`DiagnosticSink`] to the parse and merge entry points: collect them in a
//! `Vec`, forward them to `tracing`, or drop them.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A non-blank line that is not a `KEY=VALUE` assignment.
    UnmatchedLine { line_number: usize, content: String },
    /// A parsed key that was already present in the target store.
    KeyPreserved { key: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnmatchedLine { line_number, content } => {
                write!(f, "did not match line {}: {}", line_number, content)
            }
            Diagnostic::KeyPreserved { key } => {
                write!(f, "\"{}\" is already defined and was not overwritten", key)
            }
        }
    }
}

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Emits each diagnostic as a `tracing` debug event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::UnmatchedLine { line_number, content } => {
                tracing::debug!(target: "envload", line = *line_number, content = %content, "{}", diagnostic);
            }
            Diagnostic::KeyPreserved { key } => {
                tracing::debug!(target: "envload", key = %key, "{}", diagnostic);
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl DiagnosticSink for Discard {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Picks the sink implied by a `debug` flag.
pub(crate) fn debug_sink(debug: bool) -> Box<dyn DiagnosticSink> {
    if debug {
        Box::new(TracingSink)
    } else {
        Box::new(Discard)
    }
}
