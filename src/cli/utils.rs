//! Shared CLI arguments.

use clap::Args;
use std::path::PathBuf;

use envload::LoadOptions;

#[derive(Args)]
pub struct SourceArgs {
    /// Environment file to read [default: .env in the current directory]
    #[arg(short, long, value_name = "FILE", env = "ENVLOAD_FILE")]
    pub file: Option<PathBuf>,

    /// Text encoding of the file, or 'auto' to detect it
    #[arg(short, long, value_name = "ENCODING", env = "ENVLOAD_ENCODING")]
    pub encoding: Option<String>,
}

impl SourceArgs {
    pub fn load_options(&self, debug: bool) -> LoadOptions {
        LoadOptions {
            path: self.file.clone(),
            encoding: self.encoding.clone(),
            debug,
        }
    }
}
