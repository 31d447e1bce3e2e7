//! Data model for scanned logs and the JSON report schema.
//!
//! `AggregationResult` is the in-memory result of one file scan.
//! `Report` is the structure of JSON files we write to disk; it is
//! versioned to allow future evolution.

use crate::utils::config::COMPUTE_UNIT_CEILING;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Compute units consumed by one instruction invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeUnitReading {
    /// Units consumed
    pub consumed: u64,

    /// Ceiling the invocation was measured against
    pub ceiling: u64,
}

impl ComputeUnitReading {
    pub fn new(consumed: u64) -> Self {
        Self {
            consumed,
            ceiling: COMPUTE_UNIT_CEILING,
        }
    }

    /// Share of the ceiling used, in percent
    pub fn utilization(&self) -> f64 {
        if self.ceiling == 0 {
            return 0.0;
        }
        (self.consumed as f64 * 100.0) / self.ceiling as f64
    }
}

/// Readings from one log file, grouped by instruction name
///
/// Keys iterate in order of first appearance and each sequence is in
/// file order. Readings seen before any declaration sit under `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregationResult {
    groups: IndexMap<String, Vec<ComputeUnitReading>>,
}

impl AggregationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reading to the sequence for `instruction`
    pub fn record(&mut self, instruction: &str, reading: ComputeUnitReading) {
        // get_mut first so repeat names don't allocate a key
        if let Some(readings) = self.groups.get_mut(instruction) {
            readings.push(reading);
        } else {
            self.groups.insert(instruction.to_string(), vec![reading]);
        }
    }

    pub fn get(&self, instruction: &str) -> Option<&[ComputeUnitReading]> {
        self.groups.get(instruction).map(Vec::as_slice)
    }

    /// Consumed values for `instruction`, in file order
    pub fn consumed(&self, instruction: &str) -> Option<Vec<u64>> {
        self.get(instruction)
            .map(|readings| readings.iter().map(|r| r.consumed).collect())
    }

    /// Number of distinct instruction names
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of readings across all instructions
    pub fn total_readings(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn instructions(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ComputeUnitReading])> {
        self.groups
            .iter()
            .map(|(name, readings)| (name.as_str(), readings.as_slice()))
    }

    /// Collapse to `instruction -> [consumed, ...]` for reporting
    pub fn to_consumed_map(&self) -> IndexMap<String, Vec<u64>> {
        self.groups
            .iter()
            .map(|(name, readings)| {
                (name.clone(), readings.iter().map(|r| r.consumed).collect())
            })
            .collect()
    }
}

/// Per-instruction summary statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionStats {
    /// Instruction name (empty when undeclared)
    pub instruction: String,

    /// Number of readings
    pub invocations: usize,

    /// Sum of consumed units
    pub total: u64,

    pub min: u64,
    pub max: u64,
    pub mean: u64,

    /// Highest share of the ceiling used by a single invocation, in percent
    pub peak_utilization: f64,
}

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when report was generated
    pub generated_at: String,

    /// One entry per log file that was scanned
    pub files: Vec<FileReport>,

    /// Log files that could not be read
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailedFile>,
}

/// Readings and statistics for a single log file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub path: String,

    /// Program name from Anchor.toml, if the file was found that way
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Consumed units per instruction, in file order
    pub instructions: IndexMap<String, Vec<u64>>,

    pub stats: Vec<InstructionStats>,
}

/// A log file that failed to scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailedFile {
    pub path: String,
    pub error: String,
}
