//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod report;
pub mod utils;

// Re-export main command functions
pub use models::{LogSource, ReportArgs};
pub use report::{execute_report, resolve_targets, validate_args};
pub use utils::{display_version, validate_report_file};
