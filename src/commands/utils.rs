use crate::output::read_report;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a JSON report file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)
        .with_context(|| format!("Failed to load report {}", file_path.display()))?;

    let readings: usize = report
        .files
        .iter()
        .flat_map(|f| f.instructions.values())
        .map(Vec::len)
        .sum();

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Generated: {}", report.generated_at);
    println!("  Files: {}", report.files.len());
    println!("  Failures: {}", report.failures.len());
    println!("  Readings: {}", readings);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("CU Trace v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Compute unit reports for Solana program logs.");
}
