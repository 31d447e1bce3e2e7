//! CU Trace CLI
//!
//! Reads the program logs an Anchor test run leaves behind and prints
//! compute units consumed per instruction.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use cu_trace::commands::{
    display_version, execute_report, validate_args, validate_report_file, LogSource, ReportArgs,
};
use cu_trace::utils::config::{DEFAULT_ANCHOR_CONFIG, DEFAULT_CLUSTER, DEFAULT_LOG_DIR};

/// CU Trace - compute unit reports for Solana program logs
#[derive(Parser, Debug)]
#[command(name = "cu-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute (defaults to `anchor`)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Report on the logs of every program in Anchor.toml
    Anchor {
        /// Path to Anchor.toml
        #[arg(short, long, env = "CU_TRACE_ANCHOR_CONFIG", default_value = DEFAULT_ANCHOR_CONFIG)]
        config: PathBuf,

        /// Cluster whose [programs.<cluster>] table is used
        #[arg(long, default_value = DEFAULT_CLUSTER)]
        cluster: String,

        /// Directory holding the program logs
        #[arg(short, long, env = "CU_TRACE_LOG_DIR", default_value = DEFAULT_LOG_DIR)]
        log_dir: PathBuf,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print per-instruction statistics
        #[arg(long)]
        summary: bool,
    },

    /// Report on explicit log files or directories of logs
    Scan {
        /// Log files, or directories to read *.log files from
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print per-instruction statistics
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        None => run_report(ReportArgs::default())?,

        Some(Commands::Anchor {
            config,
            cluster,
            log_dir,
            output,
            summary,
        }) => run_report(ReportArgs {
            source: LogSource::Anchor {
                config,
                cluster,
                log_dir,
            },
            output_json: output,
            print_summary: summary,
        })?,

        Some(Commands::Scan {
            paths,
            output,
            summary,
        }) => run_report(ReportArgs {
            source: LogSource::Paths(paths),
            output_json: output,
            print_summary: summary,
        })?,

        Some(Commands::Validate { file }) => validate_report_file(&file)?,

        Some(Commands::Version) => display_version(),
    }

    Ok(())
}

/// Validate args, then run the report
fn run_report(args: ReportArgs) -> Result<()> {
    validate_args(&args)?;
    execute_report(args)?;
    Ok(())
}
