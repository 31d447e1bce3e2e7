//! Output writers for scan results.
//!
//! This module handles:
//! - JSON reports (written to and read from disk)
//! - Text rendering for the console

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use text::{format_aggregation, format_stats_table};
