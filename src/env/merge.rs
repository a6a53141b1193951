//! Merge parsed variables into a store without overwriting.

use serde::Serialize;

use super::EnvStore;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::Result;
use crate::parse::EnvMap;

/// Which keys a merge wrote and which it left alone.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub applied: Vec<String>,
    pub preserved: Vec<String>,
}

/// Copy every key of `parsed` that `store` does not define yet.
///
/// All pending writes are validated before the first one is applied, so an
/// invalid entry leaves the store untouched.
pub fn merge<S>(
    parsed: &EnvMap,
    store: &mut S,
    sink: &mut dyn DiagnosticSink,
) -> Result<MergeReport>
where
    S: EnvStore + ?Sized,
{
    let mut report = MergeReport::default();
    let mut pending = Vec::new();

    for (key, value) in parsed {
        if store.contains(key) {
            report.preserved.push(key.clone());
        } else {
            store.validate(key, value)?;
            pending.push((key, value));
        }
    }

    for (key, value) in pending {
        store.set(key, value);
        report.applied.push(key.clone());
    }

    for key in &report.preserved {
        sink.report(Diagnostic::KeyPreserved { key: key.clone() });
    }

    tracing::debug!(
        applied = report.applied.len(),
        preserved = report.preserved.len(),
        "merged environment"
    );

    Ok(report)
}
