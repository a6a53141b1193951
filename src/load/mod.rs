//! Loading an environment file into a store.
//!
//! [`load`] reads the file, parses it and merges the result into the process
//! environment. [`load_into`] does the same against any [`EnvStore`] and
//! reports diagnostics to a caller-supplied sink.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::diagnostics::{debug_sink, DiagnosticSink};
use crate::env::{merge, EnvStore, MergeReport, ProcessEnv};
use crate::error::{Error, Result};
use crate::parse::{parse_with, EnvMap};
use crate::utils::read_text;

/// File name used when no path is given, relative to the current directory.
pub const DEFAULT_FILE_NAME: &str = ".env";

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub path: Option<PathBuf>,
    /// Encoding label; `None` means UTF-8, `"auto"` detects.
    pub encoding: Option<String>,
    pub debug: bool,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The file to read: the configured path, else `.env` in the current directory.
    pub fn resolved_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => {
                let cwd = std::env::current_dir().map_err(Error::CurrentDir)?;
                Ok(cwd.join(DEFAULT_FILE_NAME))
            }
        }
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Loaded {
    pub path: PathBuf,
    /// Everything the file defined, including keys that were not applied.
    pub parsed: EnvMap,
    pub report: MergeReport,
}

/// Load the configured file into the process environment.
///
/// With `options.debug`, unmatched lines and preserved keys are logged
/// through `tracing`.
pub fn load(options: &LoadOptions) -> Result<Loaded> {
    let mut sink = debug_sink(options.debug);
    load_into(options, &mut ProcessEnv, sink.as_mut())
}

/// Load the configured file into `store`, reporting diagnostics to `sink`.
///
/// `options.debug` is ignored here; the sink decides what is kept. On any
/// read or decode error nothing is parsed and `store` is left untouched.
pub fn load_into<S>(
    options: &LoadOptions,
    store: &mut S,
    sink: &mut dyn DiagnosticSink,
) -> Result<Loaded>
where
    S: EnvStore + ?Sized,
{
    let path = options.resolved_path()?;
    let source = read_source(&path, options.encoding.as_deref())?;

    let parsed = parse_with(&source, sink);
    let report = merge(&parsed, store, sink)?;

    tracing::debug!(
        path = %path.display(),
        parsed = parsed.len(),
        applied = report.applied.len(),
        "loaded environment file"
    );

    Ok(Loaded { path, parsed, report })
}

fn read_source(path: &Path, encoding: Option<&str>) -> Result<String> {
    read_text(path, encoding).map_err(|err| {
        tracing::debug!(path = %path.display(), error = %err, "failed to load environment file");
        err
    })
}
