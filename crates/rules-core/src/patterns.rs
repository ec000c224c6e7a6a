//! Glob pattern splitting and compilation
//!
//! Pure helpers with no filesystem access. Configured patterns come in one
//! flat list; a `!` prefix marks an exclusion.

use crate::error::{Error, Result};

/// Pattern selecting every Markdown file under the source directory.
pub const DEFAULT_RULE_GLOB: &str = "**/*.md";

/// Configured glob patterns separated into positive and negative sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl PatternSet {
    /// Split raw patterns into positive and negative sets.
    ///
    /// A pattern prefixed with `!` contributes its remainder (if non-empty)
    /// to the negative set; any other non-empty pattern is positive.
    /// Blank patterns are dropped silently. An empty positive set defaults
    /// to [`DEFAULT_RULE_GLOB`]; the engine only ever selects Markdown.
    pub fn split<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut positive = Vec::new();
        let mut negative = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() {
                continue;
            }
            if let Some(remainder) = pattern.strip_prefix('!') {
                if !remainder.trim().is_empty() {
                    negative.push(remainder.to_string());
                }
            } else {
                positive.push(pattern.to_string());
            }
        }

        if positive.is_empty() {
            positive.push(DEFAULT_RULE_GLOB.to_string());
        }

        Self { positive, negative }
    }
}

/// Compile raw glob patterns, failing on the first invalid one.
pub fn compile_globs(patterns: &[String]) -> Result<Vec<glob::Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            glob::Pattern::new(pattern).map_err(|e| Error::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}
