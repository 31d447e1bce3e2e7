//! Anchor.toml driven log discovery.
//!
//! `anchor test` writes one log per deployed program, named
//! `<program_id>.<program_name>.log`. The program list comes from the
//! `[programs.<cluster>]` table of the workspace's Anchor.toml.

use super::LogTarget;
use crate::utils::error::ConfigError;
use log::debug;
use std::fs;
use std::path::Path;

/// A program declared in Anchor.toml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramEntry {
    /// Program name (the table key)
    pub name: String,

    /// Base58 program address
    pub program_id: String,
}

impl ProgramEntry {
    /// File name the validator uses for this program's log
    pub fn log_file_name(&self) -> String {
        format!("{}.{}.log", self.program_id, self.name)
    }
}

/// Load the programs declared for `cluster`
///
/// **Public** - main entry point for config-driven discovery
///
/// # Errors
/// * `ConfigError::Io` - File cannot be read
/// * `ConfigError::Toml` - File is not valid TOML
/// * `ConfigError::MissingCluster` - No `[programs.<cluster>]` table
/// * `ConfigError::InvalidProgramId` - A program id is not a string
///
/// # Example
/// ```ignore
/// let programs = load_programs("Anchor.toml", "localnet")?;
/// ```
pub fn load_programs(
    config_path: impl AsRef<Path>,
    cluster: &str,
) -> Result<Vec<ProgramEntry>, ConfigError> {
    let config_path = config_path.as_ref();

    debug!("Reading program list from: {}", config_path.display());

    let contents = fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;

    parse_programs(&contents, cluster)
}

/// Parse the `[programs.<cluster>]` table out of Anchor.toml text
///
/// Entries come back in declaration order.
pub fn parse_programs(contents: &str, cluster: &str) -> Result<Vec<ProgramEntry>, ConfigError> {
    let config: toml::Table = toml::from_str(contents)?;

    let programs = config
        .get("programs")
        .and_then(|programs| programs.get(cluster))
        .and_then(|table| table.as_table())
        .ok_or_else(|| ConfigError::MissingCluster(cluster.to_string()))?;

    programs
        .iter()
        .map(|(name, value)| {
            let program_id = value
                .as_str()
                .ok_or_else(|| ConfigError::InvalidProgramId(name.clone()))?;

            Ok(ProgramEntry {
                name: name.clone(),
                program_id: program_id.to_string(),
            })
        })
        .collect()
}

/// Expected log paths for every program configured for `cluster`
///
/// The files are not required to exist yet; a missing one shows up as a
/// per-file failure when it is scanned.
pub fn anchor_log_targets(
    config_path: impl AsRef<Path>,
    cluster: &str,
    log_dir: impl AsRef<Path>,
) -> Result<Vec<LogTarget>, ConfigError> {
    let log_dir = log_dir.as_ref();
    let programs = load_programs(config_path, cluster)?;

    debug!("Found {} programs for cluster '{}'", programs.len(), cluster);

    Ok(programs
        .into_iter()
        .map(|program| LogTarget {
            path: log_dir.join(program.log_file_name()),
            program: Some(program.name),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR_TOML: &str = r#"
[features]
seeds = false

[programs.localnet]
defios = "7aDTsspkQNGKmrexAN7FLx9oxU3iPczSSvHNggyuqYkR"
token_vesting = "8TJ2WHk6TL6sSYUkodmxVGkvCR6ntnbRjMGmbkqEAexF"
noop = "noopb9bkMVfRPU8AsbpTUg8AQkHtKwMYZiFUjNRtMmV"

[programs.devnet]
defios = "DevnetProgram11111111111111111111111111111"

[provider]
cluster = "localnet"
"#;

    #[test]
    fn test_parse_programs_keeps_declaration_order() {
        let programs = parse_programs(ANCHOR_TOML, "localnet").unwrap();
        let names: Vec<&str> = programs.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["defios", "token_vesting", "noop"]);
        assert_eq!(programs[0].program_id, "7aDTsspkQNGKmrexAN7FLx9oxU3iPczSSvHNggyuqYkR");
    }

    #[test]
    fn test_parse_programs_other_cluster() {
        let programs = parse_programs(ANCHOR_TOML, "devnet").unwrap();
        assert_eq!(programs.len(), 1);
    }

    #[test]
    fn test_parse_programs_missing_cluster() {
        let err = parse_programs(ANCHOR_TOML, "mainnet").unwrap_err();
        assert!(matches!(err, ConfigError::MissingCluster(c) if c == "mainnet"));
    }

    #[test]
    fn test_parse_programs_non_string_id() {
        let err = parse_programs("[programs.localnet]\nbroken = 42\n", "localnet").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProgramId(n) if n == "broken"));
    }

    #[test]
    fn test_parse_programs_invalid_toml() {
        let err = parse_programs("[programs.localnet\n", "localnet").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_log_file_name() {
        let entry = ProgramEntry {
            name: "defios".to_string(),
            program_id: "7aDT".to_string(),
        };
        assert_eq!(entry.log_file_name(), "7aDT.defios.log");
    }
}
