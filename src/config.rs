//! Scan configuration resolved from the command line and environment.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};

/// Stylesheets scanned when no files are given on the command line.
pub const DEFAULT_FILES: [&str; 4] = ["common.css", "molotov.css", "coifeuer.css", "wafer.css"];

/// Default for `--root` when the flag is absent.
pub const ROOT_ENV: &str = "CLASSCLASH_ROOT";
/// Record filesystem reads into the cassette at this path.
pub const RECORD_ENV: &str = "CLASSCLASH_RECORD";
/// Serve filesystem reads from the cassette at this path.
pub const REPLAY_ENV: &str = "CLASSCLASH_REPLAY";

/// Whether filesystem reads are recorded, replayed, or neither.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CassetteMode {
    /// Plain disk reads.
    #[default]
    Off,
    /// Disk reads, captured into a cassette at the given path.
    Record(PathBuf),
    /// Reads answered from the cassette at the given path.
    Replay(PathBuf),
}

/// Everything one scan needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory the file names are resolved against.
    pub root: PathBuf,
    /// File names in scan order, without duplicates.
    pub files: Vec<String>,
    /// Report rendering.
    pub format: OutputFormat,
    /// Record/replay selection.
    pub cassette: CassetteMode,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            files: DEFAULT_FILES.iter().map(ToString::to_string).collect(),
            format: OutputFormat::Text,
            cassette: CassetteMode::Off,
        }
    }
}

impl ScanConfig {
    /// Builds the configuration from parsed arguments and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if both recording and replaying are requested.
    pub fn from_cli(cli: &Cli) -> Result<Self, String> {
        Self::from_cli_with_env(cli, |key| std::env::var(key).ok())
    }

    /// Same as [`ScanConfig::from_cli`], with an explicit environment lookup.
    ///
    /// Empty variables count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if both recording and replaying are requested.
    pub fn from_cli_with_env<F>(cli: &Cli, env: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|v| !v.is_empty());

        let root = cli
            .root
            .clone()
            .or_else(|| env(ROOT_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."));

        let files = if cli.files.is_empty() {
            DEFAULT_FILES.iter().map(ToString::to_string).collect()
        } else {
            dedup_keep_first(&cli.files)
        };

        let cassette = match (env(RECORD_ENV), env(REPLAY_ENV)) {
            (Some(_), Some(_)) => {
                return Err(format!("{RECORD_ENV} and {REPLAY_ENV} cannot both be set"));
            }
            (Some(path), None) => CassetteMode::Record(PathBuf::from(path)),
            (None, Some(path)) => CassetteMode::Replay(PathBuf::from(path)),
            (None, None) => CassetteMode::Off,
        };

        Ok(Self { root, files, format: cli.format, cassette })
    }
}

/// Drops repeated names, keeping the first occurrence's position.
fn dedup_keep_first(files: &[String]) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(files.len());
    for file in files {
        if kept.contains(file) {
            tracing::debug!(file = %file, "ignoring repeated file argument");
        } else {
            kept.push(file.clone());
        }
    }
    kept
}
