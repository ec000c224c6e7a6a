//! Error types for rules-core

use std::path::PathBuf;

/// Result type for rules-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of filesystem action the executor was performing when a write
/// failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    CreateDir,
    WriteFile,
}

impl std::fmt::Display for WriteAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteAction::CreateDir => write!(f, "Create directory"),
            WriteAction::WriteFile => write!(f, "Write"),
        }
    }
}

/// Errors that can occur in rules-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A matched rule file could not be read; the whole load aborts.
    #[error("Failed to read rule file {path}: {source}")]
    RuleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configured glob pattern does not compile.
    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A configured output format has no registered planner.
    #[error("Unknown output format: {name}")]
    UnknownFormat { name: String },

    /// An executor write failed; remaining writes in the batch are skipped.
    #[error("{action} failed for {path}: {source}")]
    WriteFailure {
        action: WriteAction,
        path: PathBuf,
        #[source]
        source: rules_fs::Error,
    },

    /// The configured rule source directory does not exist.
    #[error("Rule source directory not found: {path}")]
    SourceDirMissing { path: PathBuf },

    /// Configuration file not found at expected path
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Path guard error from rules-fs
    #[error(transparent)]
    Fs(#[from] rules_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}
