//! Log line recognition and schema definitions.
//!
//! This module handles:
//! - Matching instruction declarations and compute unit lines
//! - Defining the aggregation data model
//! - Defining the JSON report schema

pub mod log_line;
pub mod schema;

// Re-export main types
pub use log_line::{match_consumption, match_instruction, parse_line, LineMatch};
pub use schema::{
    AggregationResult, ComputeUnitReading, FailedFile, FileReport, InstructionStats, Report,
};
