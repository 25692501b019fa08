//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use concord_core::ContextType;

pub mod extract;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract search-term matches with their surrounding context
    Extract(extract::ExtractArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List context granularities
    Granularities,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::List { subcommand } => {
                match subcommand {
                    ListCommands::Granularities => {
                        for granularity in ContextType::ALL {
                            println!("{granularity}");
                        }
                    }
                    ListCommands::Formats => {
                        println!("text");
                        println!("json");
                        println!("markdown");
                    }
                }
                Ok(())
            }
        }
    }
}
