use crate::utils::config::{DEFAULT_ANCHOR_CONFIG, DEFAULT_CLUSTER, DEFAULT_LOG_DIR};
use std::path::PathBuf;

/// Where the log files to scan come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    /// One expected log per program in Anchor.toml
    Anchor {
        config: PathBuf,
        cluster: String,
        log_dir: PathBuf,
    },

    /// Explicit files, or directories to list `.log` files from
    Paths(Vec<PathBuf>),
}

impl Default for LogSource {
    fn default() -> Self {
        LogSource::Anchor {
            config: PathBuf::from(DEFAULT_ANCHOR_CONFIG),
            cluster: DEFAULT_CLUSTER.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    /// Log files to scan
    pub source: LogSource,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print per-instruction statistics table
    pub print_summary: bool,
}
