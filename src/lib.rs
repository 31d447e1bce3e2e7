//! CU Trace
//!
//! Compute unit reports for Solana programs, built from the
//! program logs an Anchor test run leaves in `.anchor/program-logs`.
//!
//! This crate provides the core implementation for the
//! `cu-trace` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! anchor test
//! cu-trace --help
//! cu-trace anchor --summary
//! ```
//!
//! Library users usually only need [`aggregator::aggregate`]:
//!
//! ```ignore
//! let result = cu_trace::aggregator::aggregate(".anchor/program-logs/Fg6P.defios.log")?;
//! for (instruction, readings) in result.iter() {
//!     println!("{instruction}: {}", readings.len());
//! }
//! ```

pub mod aggregator;
pub mod commands;
pub mod discovery;
pub mod output;
pub mod parser;
pub mod utils;
