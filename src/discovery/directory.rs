//! Directory enumeration of log files.

use super::LogTarget;
use crate::utils::config::LOG_FILE_EXTENSION;
use crate::utils::error::DiscoveryError;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// List every `.log` file directly inside `dir`, sorted by path
///
/// Subdirectories are not descended into.
pub fn list_log_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, DiscoveryError> {
    let dir = dir.as_ref();
    let read_dir_error = |source: std::io::Error| DiscoveryError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if path.is_file() && has_log_extension(&path) {
            files.push(path);
        }
    }
    files.sort();

    debug!("{}: {} log files", dir.display(), files.len());

    Ok(files)
}

/// Turn user-supplied paths into scan targets
///
/// Files pass through as given (even if missing), directories are
/// replaced by the log files they contain.
pub fn expand_paths(paths: &[PathBuf]) -> Result<Vec<LogTarget>, DiscoveryError> {
    let mut targets = Vec::new();

    for path in paths {
        if path.is_dir() {
            targets.extend(list_log_files(path)?.into_iter().map(LogTarget::from_path));
        } else {
            targets.push(LogTarget::from_path(path.clone()));
        }
    }

    Ok(targets)
}

fn has_log_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == LOG_FILE_EXTENSION)
}
