//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate a markdown list of tool reference links
#[derive(Parser, Debug)]
#[command(name = "tool-links")]
#[command(about = "Generate a markdown list of tool reference links")]
#[command(version)]
pub struct Args {
    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the links document to disk
    Generate {
        /// Output file [default: TOOLS_LINKS.md]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file with links and output path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the links without writing a file
    List {
        /// Config file with links
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the table as JSON instead of markdown
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate {
            output: None,
            config: None,
            verbose: false,
        }
    }
}
