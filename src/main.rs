//! envload: inspect `.env` files and run commands with them loaded.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
