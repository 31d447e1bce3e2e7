//! Configuration and constants for the CLI.

/// Compute unit ceiling every consumption line is measured against.
/// Lines reporting any other ceiling are not recognised.
pub const COMPUTE_UNIT_CEILING: u64 = 200_000;

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Anchor workspace manifest read by the `anchor` command
pub const DEFAULT_ANCHOR_CONFIG: &str = "Anchor.toml";

/// Cluster whose `[programs.<cluster>]` table names the programs
pub const DEFAULT_CLUSTER: &str = "localnet";

/// Where `anchor test` leaves the validator's per-program logs
pub const DEFAULT_LOG_DIR: &str = ".anchor/program-logs";

pub const LOG_FILE_EXTENSION: &str = "log";

/// Display label for readings seen before any instruction was declared
pub const NO_INSTRUCTION_LABEL: &str = "(no instruction)";
