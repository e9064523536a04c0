//! CLI module for tool-links

mod args;

pub use args::{Args, Command};

use crate::config::Config;
use crate::error::Result;
use crate::output::{render, MarkdownConfig, MarkdownGenerator};
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command.unwrap_or_default() {
        Command::Generate {
            output,
            config,
            verbose,
        } => {
            let mut cfg = Config::load_optional(config.as_deref())?;
            cfg.merge_cli(output);
            let table = cfg.table();

            let generator = MarkdownGenerator::new(MarkdownConfig {
                output_path: cfg.output.path.clone(),
            });

            if verbose {
                if let Some(path) = &config {
                    println!("Config: {}", path.display());
                }
                println!("Output: {}", generator.output_path().display());
                println!("Links: {}", table.entries().len());
            }
            let report = generator.generate(table.entries())?;

            if verbose {
                println!("{}", report.summary());
            }
            println!("Wrote {}", report.resolved_path().display());

            Ok(())
        }

        Command::List { config, json } => {
            let table = Config::load_optional(config.as_deref())?.table();

            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                print!("{}", render(table.entries()).as_str());
            }

            Ok(())
        }

        Command::Version => {
            println!("tool-links {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
