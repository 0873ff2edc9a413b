//! Benchplot CLI
//!
//! A Rust tool for analyzing micro-benchmark CSV results: summary
//! statistics on stdout, comparison charts on disk.

use anyhow::Result;
use benchplot::commands::{execute_inlining, execute_unrolling, InliningArgs, UnrollingArgs};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Benchplot - micro-benchmark analysis and chart generation
#[derive(Parser, Debug)]
#[command(name = "benchplot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Combine inlining result files, print the per-mode execution time
    /// summary and render the comparison bar chart
    Inlining {
        /// Result files to combine (columns: mode, n, time; no header row)
        #[arg(
            default_values = [
                "default_results.csv",
                "force_results.csv",
                "noinline_results.csv",
            ]
        )]
        inputs: Vec<PathBuf>,
    },

    /// Render the loop unrolling timing curve
    Unrolling {
        /// Result file (columns: unroll_factor, time_ns; no header row)
        #[arg(default_value = "results.csv")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Inlining { inputs } => {
            let args = InliningArgs {
                inputs,
                ..Default::default()
            };
            execute_inlining(args)?;
        }

        Commands::Unrolling { input } => {
            let args = UnrollingArgs {
                input,
                ..Default::default()
            };
            execute_unrolling(args)?;
        }
    }

    Ok(())
}
