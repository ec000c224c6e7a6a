//! Rule type for loaded rule documents

/// One Markdown rule document selected from the central rule directory.
///
/// Rules are immutable once loaded; each sync operation loads a fresh set
/// and discards it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Path relative to the rule source directory, forward slashes,
    /// unique within one load.
    pub path: String,
    /// Raw file contents.
    pub content: String,
}

impl Rule {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
