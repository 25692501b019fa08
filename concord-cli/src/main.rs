//! Concord command-line interface

use anyhow::Result;
use clap::Parser;
use concord_cli::commands::Commands;

/// Concordance-style context extraction for text corpora
#[derive(Debug, Parser)]
#[command(name = "concord", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
