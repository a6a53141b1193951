//! Run command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::process::Command;

use super::utils::SourceArgs;
use envload::load;

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Command to run, followed by its arguments
    #[arg(required = true, trailing_var_arg = true, num_args = 1.., value_name = "COMMAND")]
    pub command: Vec<String>,
}

pub fn run(args: RunArgs, debug: bool) -> Result<()> {
    let options = args.source.load_options(debug);
    let loaded = load(&options).context("Failed to load environment file")?;
    tracing::debug!(
        applied = loaded.report.applied.len(),
        preserved = loaded.report.preserved.len(),
        "environment ready"
    );

    let (program, program_args) = args.command.split_first().context("No command given")?;
    let status = Command::new(program)
        .args(program_args)
        .status()
        .with_context(|| format!("Failed to run {}", program))?;

    // Killed by a signal: no exit code to forward.
    std::process::exit(status.code().unwrap_or(1));
}
