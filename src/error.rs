//! Error types for loading environment files.
//!
//! Malformed lines are never errors; they surface as diagnostics instead.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to resolve the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("unknown text encoding '{0}'")]
    UnknownEncoding(String),

    #[error("{} is not valid {encoding}", .path.display())]
    Decode { path: PathBuf, encoding: &'static str },

    #[error("cannot set '{key}': {reason}")]
    InvalidEntry { key: String, reason: &'static str },
}
