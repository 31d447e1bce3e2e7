//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while scanning a single log file
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Cannot open log file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed reading log file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AggregateError {
    /// Path of the log file that failed
    pub fn path(&self) -> &Path {
        match self {
            AggregateError::FileAccess { path, .. } | AggregateError::Read { path, .. } => path,
        }
    }
}

/// Errors that can occur while loading Anchor.toml
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("No [programs.{0}] table in config")]
    MissingCluster(String),

    #[error("Program id for '{0}' must be a string")]
    InvalidProgramId(String),
}

/// Errors that can occur while enumerating log files
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Cannot list directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
