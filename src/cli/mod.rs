//! Command-line interface for envload
//!
//! Provides `parse`, `check` and `run` subcommands over a single `.env` file.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

mod check;
mod parse;
mod run;
mod utils;

/// Parse KEY=VALUE environment files and run commands with them loaded
#[derive(Parser)]
#[command(name = "envload")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log unmatched lines and keys that were not overwritten
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the variables an environment file defines
    Parse(parse::ParseArgs),

    /// Report lines that are not KEY=VALUE assignments
    Check(check::CheckArgs),

    /// Load an environment file, then run a command with it
    Run(run::RunArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let mut filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    if cli.debug {
        filter = filter.add_directive("envload=debug".parse::<Directive>()?);
    }
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Parse(args) => parse::run(args, cli.debug),
        Commands::Check(args) => check::run(args),
        Commands::Run(args) => run::run(args, cli.debug),
    }
}
