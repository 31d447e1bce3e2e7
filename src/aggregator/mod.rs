//! Aggregation of log readings into per-instruction groups and metrics.
//!
//! This module transforms raw program logs into:
//! - Compute unit readings grouped by instruction
//! - Per-instruction statistics (min/max/mean/peak)

pub mod compute_units;
pub mod metrics;

// Re-export main types and functions
pub use compute_units::{aggregate, aggregate_reader, aggregate_str};
pub use metrics::calculate_instruction_stats;
