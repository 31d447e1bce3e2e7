//! Line-level recognisers for Solana program logs.
//!
//! Two shapes matter:
//! - `Program log: Instruction: <Name>` declares the instruction that is running
//! - `Program <id> consumed <n> of 200000 compute units` reports its cost
//!
//! Everything else in the log is ignored.

use super::schema::ComputeUnitReading;
use crate::utils::config::COMPUTE_UNIT_CEILING;
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

lazy_static! {
    static ref INSTRUCTION_RE: Regex =
        Regex::new(r"Program log: Instruction: (\w+)").expect("instruction pattern is valid");
    static ref CONSUMPTION_RE: Regex = Regex::new(&format!(
        r"Program \w+ consumed ([0-9]+) of {} compute units",
        COMPUTE_UNIT_CEILING
    ))
    .expect("consumption pattern is valid");
}

/// What a single log line contributed
///
/// Both recognisers run on every line, so both fields may be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineMatch<'a> {
    /// Instruction name declared on this line
    pub instruction: Option<&'a str>,

    /// Compute units reported on this line
    pub reading: Option<ComputeUnitReading>,
}

impl LineMatch<'_> {
    pub fn is_empty(&self) -> bool {
        self.instruction.is_none() && self.reading.is_none()
    }
}

/// Run both recognisers over one line
///
/// **Public** - used by the aggregator scan loop
pub fn parse_line(line: &str) -> LineMatch<'_> {
    LineMatch {
        instruction: match_instruction(line),
        reading: match_consumption(line),
    }
}

/// Extract the instruction name from a declaration line
pub fn match_instruction(line: &str) -> Option<&str> {
    INSTRUCTION_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extract the compute unit reading from a consumption line
///
/// A digit run that does not fit in `u64` is logged and treated as no match.
pub fn match_consumption(line: &str) -> Option<ComputeUnitReading> {
    let digits = CONSUMPTION_RE.captures(line)?.get(1)?.as_str();

    match digits.parse::<u64>() {
        Ok(consumed) => Some(ComputeUnitReading::new(consumed)),
        Err(e) => {
            warn!("Skipping unparsable compute unit count '{}': {}", digits, e);
            None
        }
    }
}
