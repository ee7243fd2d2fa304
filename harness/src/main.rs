//! Scenario harness for the rotator.
//!
//! Replays the TOML suites under `harness/cases/` plus a timed performance
//! scenario, printing a PASS/FAIL block per case and an overall summary.

mod case;
mod cli;
mod config;
mod exit_codes;
mod judge;
mod outcome;
mod perf;
mod report;
mod run;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "harness", version, about = "Scenario harness for the rotator")]
struct Cli {
    /// Harness config file (default: `harness/harness.toml` under the current directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Raise diagnostic verbosity (`-v` info, `-vv` debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print suite ids and case counts.
    List,
    /// Run suites and the performance scenario.
    Run {
        /// Only run the suite with this id.
        #[arg(long)]
        suite: Option<String>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    rotator::logging::init(cli.verbose);
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let repo_root = std::env::current_dir()?;
    let config_path = cli
        .config
        .unwrap_or_else(|| repo_root.join("harness").join("harness.toml"));
    match cli.command {
        Command::List => cli::list_suites(&repo_root, &config_path),
        Command::Run { suite, json } => {
            cli::run_suites(&repo_root, &config_path, suite.as_deref(), json)
        }
    }
}
