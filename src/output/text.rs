//! Plain-text rendering for the console.
//!
//! Output here is for people reading a terminal, not a stable format.
//! Use the JSON report for anything machine-read.

use crate::parser::schema::{AggregationResult, InstructionStats};
use crate::utils::config::NO_INSTRUCTION_LABEL;

/// One line per instruction: `<name>: <v1>, <v2>, ...`
pub fn format_aggregation(result: &AggregationResult) -> String {
    let mut lines = Vec::with_capacity(result.len());

    for (name, readings) in result.iter() {
        let values: Vec<String> = readings.iter().map(|r| r.consumed.to_string()).collect();
        lines.push(format!("{}: {}", display_name(name), values.join(", ")));
    }

    lines.join("\n")
}

/// Aligned statistics table, widest instruction name sets the column
pub fn format_stats_table(stats: &[InstructionStats]) -> String {
    let name_width = stats
        .iter()
        .map(|s| s.display_name().len())
        .chain(std::iter::once("INSTRUCTION".len()))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(stats.len() + 2);
    lines.push(format!(
        "{:<w$}  {:>6}  {:>8}  {:>8}  {:>8}  {:>7}",
        "INSTRUCTION",
        "CALLS",
        "MIN",
        "MAX",
        "MEAN",
        "PEAK",
        w = name_width
    ));
    lines.push("-".repeat(name_width + 47));

    for s in stats {
        lines.push(format!(
            "{:<w$}  {:>6}  {:>8}  {:>8}  {:>8}  {:>6.1}%",
            s.display_name(),
            s.invocations,
            s.min,
            s.max,
            s.mean,
            s.peak_utilization,
            w = name_width
        ));
    }

    lines.join("\n")
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        NO_INSTRUCTION_LABEL
    } else {
        name
    }
}
