//! Discovery of which log files to scan.
//!
//! Two strategies, both producing an explicit list of targets for the
//! aggregator:
//! - Anchor.toml: expected `<program_id>.<name>.log` per configured program
//! - Directory listing: every `.log` file in the given directories

pub mod anchor;
pub mod directory;

use std::path::PathBuf;

pub use anchor::{anchor_log_targets, load_programs, parse_programs, ProgramEntry};
pub use directory::{expand_paths, list_log_files};

/// A log file to scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogTarget {
    pub path: PathBuf,

    /// Program name, when the path came from Anchor.toml
    pub program: Option<String>,
}

impl LogTarget {
    pub fn from_path(path: PathBuf) -> Self {
        Self {
            path,
            program: None,
        }
    }
}
