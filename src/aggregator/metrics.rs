//! Summary statistics per instruction.
//!
//! The instructions with the highest peak usage are the ones closest
//! to hitting the compute budget, so they are the primary targets for
//! optimization.

use crate::parser::schema::{AggregationResult, ComputeUnitReading, InstructionStats};
use crate::utils::config::NO_INSTRUCTION_LABEL;
use log::debug;

/// Calculate statistics for every instruction in a scan result
///
/// **Public** - main entry point for metrics calculation
///
/// # Returns
/// One entry per instruction, in the result's key order
pub fn calculate_instruction_stats(result: &AggregationResult) -> Vec<InstructionStats> {
    debug!("Calculating stats for {} instructions", result.len());

    result
        .iter()
        .filter(|(_, readings)| !readings.is_empty())
        .map(|(name, readings)| create_stats(name, readings))
        .collect()
}

/// Build stats for one instruction
///
/// **Private** - callers guarantee `readings` is non-empty
fn create_stats(instruction: &str, readings: &[ComputeUnitReading]) -> InstructionStats {
    // u128 so large readings cannot overflow the sum
    let total: u128 = readings.iter().map(|r| u128::from(r.consumed)).sum();
    let min = readings.iter().map(|r| r.consumed).min().unwrap_or(0);
    let max = readings.iter().map(|r| r.consumed).max().unwrap_or(0);
    let peak_utilization = readings
        .iter()
        .map(ComputeUnitReading::utilization)
        .fold(0.0, f64::max);

    InstructionStats {
        instruction: instruction.to_string(),
        invocations: readings.len(),
        total: u64::try_from(total).unwrap_or(u64::MAX),
        min,
        max,
        // never exceeds max, so it always fits
        mean: (total / readings.len().max(1) as u128) as u64,
        peak_utilization,
    }
}

impl InstructionStats {
    /// Name for display, with a label for undeclared readings
    pub fn display_name(&self) -> &str {
        if self.instruction.is_empty() {
            NO_INSTRUCTION_LABEL
        } else {
            &self.instruction
        }
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "{}: {} calls | Min: {} | Max: {} | Mean: {} | Peak: {:.1}%",
            self.display_name(),
            self.invocations,
            self.min,
            self.max,
            self.mean,
            self.peak_utilization
        )
    }
}
