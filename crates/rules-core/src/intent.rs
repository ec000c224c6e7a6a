//! Write intents
//!
//! A write intent is a planned, not-yet-applied filesystem mutation. A
//! batch of intents for one sync operation is the complete description of
//! every write about to occur; nothing outside the batch may be touched.

use serde::Serialize;

use rules_fs::NormalizedPath;

/// A planned write of `content` to the absolute target `path`.
///
/// Produced exclusively by output planners; the executor re-validates each
/// intent against the announced plan immediately before the side effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteIntent {
    /// Absolute, normalized target path (no `..`, no redundant separators).
    pub path: NormalizedPath,
    /// Full file contents to write, UTF-8.
    pub content: String,
}

impl WriteIntent {
    pub fn new(path: NormalizedPath, content: impl Into<String>) -> Self {
        Self {
            path,
            content: content.into(),
        }
    }
}
