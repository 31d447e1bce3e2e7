//! Report command implementation.
//!
//! The report command:
//! 1. Resolves which log files to scan
//! 2. Aggregates each file's compute unit readings
//! 3. Prints grouped readings (and stats, if requested)
//! 4. Writes the JSON report (if requested)
//!
//! A file that cannot be read is printed and recorded as a failure;
//! the remaining files are still scanned.

use super::models::{LogSource, ReportArgs};
use crate::aggregator::{aggregate, calculate_instruction_stats};
use crate::discovery::{anchor_log_targets, expand_paths, list_log_files, LogTarget};
use crate::output::{format_aggregation, format_stats_table, write_report};
use crate::parser::schema::{AggregationResult, FailedFile, FileReport, Report};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use log::{debug, info, warn};
use std::path::Path;
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The report that was printed (and written, if `output_json` is set)
///
/// # Errors
/// * Anchor.toml missing or malformed
/// * A directory argument cannot be listed
/// * JSON report cannot be written
///
/// Unreadable log files are not errors here; see [`Report::failures`].
pub fn execute_report(args: ReportArgs) -> Result<Report> {
    let start_time = Instant::now();

    info!("Step 1/3: Resolving log files...");
    let targets = resolve_targets(&args.source)?;

    if targets.is_empty() {
        warn!("No log files to scan");
    }

    info!("Step 2/3: Scanning {} log files...", targets.len());
    let mut files = Vec::with_capacity(targets.len());
    let mut failures = Vec::new();

    for target in &targets {
        match aggregate(&target.path) {
            Ok(result) => {
                print_file_result(target, &result, args.print_summary);
                files.push(to_file_report(target, &result));
            }
            Err(e) => {
                warn!("Skipping {}: {}", target.path.display(), e);
                println!("{} {}", "✗".red(), e);
                failures.push(FailedFile {
                    path: e.path().display().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    let report = Report {
        version: REPORT_SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        files,
        failures,
    };

    if let Some(output_path) = &args.output_json {
        info!("Step 3/3: Writing report...");
        write_report(&report, output_path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", output_path.display());
    } else {
        info!("Step 3/3: Skipping JSON report (not requested)");
    }

    info!(
        "Scanned {} files ({} failed) in {:.2}s",
        report.files.len(),
        report.failures.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Resolve a log source to the files to scan, in scan order
///
/// **Public** - exposed so callers can preview what will be scanned
pub fn resolve_targets(source: &LogSource) -> Result<Vec<LogTarget>> {
    match source {
        LogSource::Anchor {
            config,
            cluster,
            log_dir,
        } => {
            log_directory_contents(log_dir);
            anchor_log_targets(config, cluster, log_dir)
                .with_context(|| format!("Failed to load programs from {}", config.display()))
        }
        LogSource::Paths(paths) => expand_paths(paths).context("Failed to list log files"),
    }
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    match &args.source {
        LogSource::Anchor {
            config,
            cluster,
            log_dir,
        } => {
            if config.as_os_str().is_empty() {
                anyhow::bail!("Anchor config path cannot be empty");
            }
            if cluster.trim().is_empty() {
                anyhow::bail!("Cluster name cannot be empty");
            }
            if log_dir.as_os_str().is_empty() {
                anyhow::bail!("Log directory cannot be empty");
            }
        }
        LogSource::Paths(paths) => {
            if paths.is_empty() {
                anyhow::bail!("At least one log file or directory is required");
            }
        }
    }

    if let Some(output) = &args.output_json {
        if output.as_os_str().is_empty() {
            anyhow::bail!("Output path cannot be empty");
        }
    }

    Ok(())
}

/// Log what the validator left in the log directory
///
/// **Private** - informational only, discovery uses Anchor.toml
fn log_directory_contents(log_dir: &Path) {
    match list_log_files(log_dir) {
        Ok(files) => {
            info!("{} contains {} log files", log_dir.display(), files.len());
            for file in &files {
                debug!("  {}", file.display());
            }
        }
        Err(e) => warn!("{}", e),
    }
}

/// Print one file's grouped readings
///
/// **Private** - internal helper for execute_report
fn print_file_result(target: &LogTarget, result: &AggregationResult, print_summary: bool) {
    let heading = match &target.program {
        Some(program) => format!("{} ({})", program, target.path.display()),
        None => target.path.display().to_string(),
    };
    println!("{}", heading.bold());

    if result.is_empty() {
        println!("  no compute unit readings");
        return;
    }

    for line in format_aggregation(result).lines() {
        println!("  {}", line);
    }

    if print_summary {
        println!();
        let stats = calculate_instruction_stats(result);
        for line in format_stats_table(&stats).lines() {
            println!("  {}", line);
        }
    }
    println!();
}

/// Convert a scan result to its report entry
///
/// **Private** - internal helper for execute_report
fn to_file_report(target: &LogTarget, result: &AggregationResult) -> FileReport {
    FileReport {
        path: target.path.display().to_string(),
        program: target.program.clone(),
        instructions: result.to_consumed_map(),
        stats: calculate_instruction_stats(result),
    }
}
