//! Parse command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use super::utils::SourceArgs;
use envload::render::{render_dotenv, render_json};
use envload::utils::read_text;
use envload::{parse, ParseOptions};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// KEY=VALUE lines, quoted where needed
    #[default]
    Env,
    /// A JSON object of keys to values
    Json,
}

#[derive(Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Env)]
    pub format: OutputFormat,
}

pub fn run(args: ParseArgs, debug: bool) -> Result<()> {
    let path = args.source.load_options(debug).resolved_path()?;
    let source = read_text(&path, args.source.encoding.as_deref())
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let map = parse(&source, &ParseOptions { debug });

    match args.format {
        OutputFormat::Env => print!("{}", render_dotenv(&map)),
        OutputFormat::Json => println!("{}", render_json(&map)?),
    }

    Ok(())
}
