//! Check command implementation

use anyhow::{Context, Result};
use clap::Args;

use super::utils::SourceArgs;
use envload::utils::read_text;
use envload::{parse_with, Diagnostic};

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print diagnostics as JSON lines
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let path = args.source.load_options(false).resolved_path()?;
    let source = read_text(&path, args.source.encoding.as_deref())
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let map = parse_with(&source, &mut diagnostics);

    for diagnostic in &diagnostics {
        if args.json {
            println!("{}", serde_json::to_string(diagnostic)?);
        } else if let Diagnostic::UnmatchedLine { line_number, content } = diagnostic {
            println!("{}:{}: {}", path.display(), line_number, content);
        }
    }

    if !diagnostics.is_empty() {
        anyhow::bail!(
            "{} line(s) in {} did not match KEY=VALUE",
            diagnostics.len(),
            path.display()
        );
    }

    if !args.json {
        println!("{}: {} variable(s), no problems found", path.display(), map.len());
    }
    Ok(())
}
