//! envload: parse `KEY=VALUE` environment files and merge them into an
//! environment without overwriting what is already there.
//!
//! ```no_run
//! use envload::{load, LoadOptions};
//!
//! let loaded = load(&LoadOptions::new().path(".env.local").debug(true))?;
//! println!("{} keys parsed", loaded.parsed.len());
//! # Ok::<(), envload::Error>(())
//! ```

pub mod diagnostics;
pub mod env;
pub mod error;
pub mod load;
pub mod parse;
pub mod render;
pub mod utils;

pub use diagnostics::{Diagnostic, DiagnosticSink, Discard, TracingSink};
pub use env::{merge, EnvStore, MemoryEnv, MergeReport, ProcessEnv};
pub use error::{Error, Result};
pub use load::{load, load_into, LoadOptions, Loaded, DEFAULT_FILE_NAME};
pub use parse::{parse, parse_lines, parse_with, reduce, EnvMap, ParseOptions, ParsedLine};
