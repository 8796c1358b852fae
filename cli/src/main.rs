//! # Strata CLI
//!
//! Strata builds a structural snapshot of a codebase: languages,
//! frameworks, an architecture guess, naming conventions, and unresolved
//! dependency edges — all from heuristic pattern matching, no build step.
//!
//! ## Usage
//!
//! ```bash
//! # Snapshot the current directory
//! strata scan
//!
//! # One view, machine readable
//! strata scan --view dependencies --output json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use strata::commands;
use strata::commands::scan::{OutputFormat, ScanArgs, SnapshotView};

/// Initialize logger based on verbose flag
fn init_logger(verbose: bool) {
    let mut log_builder = env_logger::Builder::from_default_env();
    if verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    } else {
        log_builder.filter_level(log::LevelFilter::Info);
    }
    log_builder.init();
}

/// Main CLI structure
#[derive(Parser)]
#[command(name = "strata")]
#[command(about = "Strata — structural snapshots of any codebase", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Scan a project and print views over its structural snapshot
    Scan {
        /// Project root to scan (defaults to the current directory)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
        /// Snapshot view to print
        #[arg(long, value_name = "VIEW", default_value = "all")]
        view: SnapshotView,
        /// Output format (basic: header + one line, full: detailed views, json: report envelope)
        #[arg(long, value_name = "OUTPUT", default_value = "full")]
        output: OutputFormat,
        /// Enable verbose logging
        #[arg(long, short = 'v')]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Scan {
            path,
            view,
            output,
            verbose,
        } => {
            init_logger(verbose);
            commands::scan::execute(ScanArgs { path, view, output }).await
        }
    };

    std::process::exit(exit_code);
}
