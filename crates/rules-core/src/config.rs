//! Configuration manifest parsing
//!
//! The manifest (`rules.toml`) names the central rule source directory and
//! the client projects it feeds. Paths are expected to be absolute; the
//! path guard rejects relative roots at engine construction.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use rules_fs::NormalizedPath;

/// The central rule source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    /// Absolute path of the directory holding the rule Markdown files.
    pub dir: String,
}

/// One client project receiving rendered rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Absolute path of the project root.
    pub path: String,

    /// Glob patterns selecting rules, `!`-prefixed for exclusion.
    /// Empty means every Markdown file.
    #[serde(default)]
    pub rules: Vec<String>,

    /// Output format names to render (e.g. "claude", "cursor").
    #[serde(default)]
    pub formats: Vec<String>,

    /// Rule paths to leave out of single-file renderings.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Parsed configuration for one sync run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub source: SourceSection,

    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
}

impl Config {
    /// Parse a configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    ///
    /// # Errors
    ///
    /// [`Error::ConfigNotFound`] if `path` does not name a file.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_native(),
            });
        }
        let content = fs::read_to_string(path.to_native())?;
        Self::parse(&content)
    }
}
