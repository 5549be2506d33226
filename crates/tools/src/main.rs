use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use foundation::Year;
use timeline::TimelineDataset;
use tools::{SummaryReport, ToolError, blocks_until, format_blocks, load_records};
use tracing_subscriber::EnvFilter;

/// Inspect saved street query responses.
#[derive(Debug, Parser)]
#[command(name = "streets", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Record, line and year statistics of a saved response.
    Summary {
        response: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print the timeline blocks of a saved response.
    Timeline {
        response: PathBuf,
        /// Only blocks up to and including this year.
        #[arg(long)]
        until: Option<String>,
    },
    /// Print the street query text.
    Query,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ToolError> {
    match cli.command {
        Command::Summary { response, json } => {
            let dataset = TimelineDataset::build(&load_records(&response)?);
            let report = SummaryReport::from_dataset(&dataset);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report.to_text());
            }
        }
        Command::Timeline { response, until } => {
            let dataset = TimelineDataset::build(&load_records(&response)?);
            let until = until.map(Year::from);
            print!("{}", format_blocks(blocks_until(&dataset.blocks, until.as_ref())));
        }
        Command::Query => println!("{}", formats::STREETS_QUERY.trim()),
    }
    Ok(())
}
