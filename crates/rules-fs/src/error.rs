//! Error types for rules-fs

use std::path::PathBuf;

/// Result type for rules-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rules-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid path: empty or whitespace-only input")]
    InvalidPath,

    #[error("Path is outside the allowed roots: {path}")]
    OutsideAllowedRoots { path: String },

    #[error("Path guard requires at least one allowed root")]
    NoRootsProvided,

    #[error("Allowed root must be an absolute path: {root}")]
    RootNotAbsolute { root: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn outside(path: impl Into<String>) -> Self {
        Self::OutsideAllowedRoots { path: path.into() }
    }
}
