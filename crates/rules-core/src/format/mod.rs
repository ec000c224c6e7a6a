//! Output formats
//!
//! Each downstream tool expects the rule set rendered in its own on-disk
//! shape. A format is one variant of [`OutputFormat`] with a single
//! capability: turning a project root plus a loaded rule list into write
//! intents. Planning is pure; no planner touches the filesystem.
//!
//! Two shapes exist. Single-file formats concatenate every rule into one
//! generated document; multi-file formats mirror each rule into its own
//! file under a tool-specific directory, either preserving the rule's
//! relative path or flattening it into the directory.

mod multi_file;
mod single_file;

use crate::error::{Error, Result};
use crate::intent::WriteIntent;
use crate::rule::Rule;
use multi_file::MultiFileTarget;
use rules_fs::NormalizedPath;
use single_file::SingleFileTarget;

/// A downstream tool's expected on-disk representation of the rule set.
///
/// The set is closed: adding a tool means adding a variant here, not
/// registering a plugin at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// `CLAUDE.md` at the project root.
    Claude,
    /// `AGENTS.md` at the project root.
    Agents,
    /// `.clinerules` at the project root.
    Cline,
    /// `.windsurfrules` at the project root.
    Windsurf,
    /// `.github/copilot-instructions.md`.
    Copilot,
    /// One file per rule under `.cursor/rules/`, relative paths preserved.
    Cursor,
    /// One file per rule under `.amazonq/rules/`, relative paths flattened.
    AmazonQ,
}

impl OutputFormat {
    /// Every known format, in display order.
    pub const ALL: [OutputFormat; 7] = [
        OutputFormat::Claude,
        OutputFormat::Agents,
        OutputFormat::Cline,
        OutputFormat::Windsurf,
        OutputFormat::Copilot,
        OutputFormat::Cursor,
        OutputFormat::AmazonQ,
    ];

    /// Resolve a configured format name.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownFormat`] when no planner is registered for `name`.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "claude" => Ok(OutputFormat::Claude),
            "agents" => Ok(OutputFormat::Agents),
            "cline" => Ok(OutputFormat::Cline),
            "windsurf" => Ok(OutputFormat::Windsurf),
            "copilot" => Ok(OutputFormat::Copilot),
            "cursor" => Ok(OutputFormat::Cursor),
            "amazonq" => Ok(OutputFormat::AmazonQ),
            _ => Err(Error::UnknownFormat {
                name: name.to_string(),
            }),
        }
    }

    /// The format's configuration name.
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Claude => "claude",
            OutputFormat::Agents => "agents",
            OutputFormat::Cline => "cline",
            OutputFormat::Windsurf => "windsurf",
            OutputFormat::Copilot => "copilot",
            OutputFormat::Cursor => "cursor",
            OutputFormat::AmazonQ => "amazonq",
        }
    }

    /// For multi-file formats, the output directory relative to the
    /// project root. Single-file formats return `None`.
    pub fn output_dir(&self) -> Option<&'static str> {
        match self.target() {
            FormatTarget::SingleFile(_) => None,
            FormatTarget::MultiFile(target) => Some(target.output_dir),
        }
    }

    /// Plan the writes that render `rules` for this format under
    /// `project_root`.
    ///
    /// Pure: only describes writes, performs none. `exclude` filters rules
    /// out of single-file renderings by relative path; multi-file formats
    /// mirror the rule set untouched.
    pub fn plan(
        &self,
        project_root: &NormalizedPath,
        rules: &[Rule],
        exclude: &[glob::Pattern],
    ) -> Vec<WriteIntent> {
        match self.target() {
            FormatTarget::SingleFile(target) => {
                single_file::plan(&target, project_root, rules, exclude)
            }
            FormatTarget::MultiFile(target) => multi_file::plan(&target, project_root, rules),
        }
    }

    fn target(&self) -> FormatTarget {
        match self {
            OutputFormat::Claude => FormatTarget::SingleFile(SingleFileTarget {
                file_name: "CLAUDE.md",
                title: "Project Rules",
            }),
            OutputFormat::Agents => FormatTarget::SingleFile(SingleFileTarget {
                file_name: "AGENTS.md",
                title: "Project Rules",
            }),
            OutputFormat::Cline => FormatTarget::SingleFile(SingleFileTarget {
                file_name: ".clinerules",
                title: "Project Rules",
            }),
            OutputFormat::Windsurf => FormatTarget::SingleFile(SingleFileTarget {
                file_name: ".windsurfrules",
                title: "Project Rules",
            }),
            OutputFormat::Copilot => FormatTarget::SingleFile(SingleFileTarget {
                file_name: ".github/copilot-instructions.md",
                title: "Copilot Instructions",
            }),
            OutputFormat::Cursor => FormatTarget::MultiFile(MultiFileTarget {
                output_dir: ".cursor/rules",
                flatten: false,
            }),
            OutputFormat::AmazonQ => FormatTarget::MultiFile(MultiFileTarget {
                output_dir: ".amazonq/rules",
                flatten: true,
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

enum FormatTarget {
    SingleFile(SingleFileTarget),
    MultiFile(MultiFileTarget),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_format() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::parse(format.name()).unwrap(), format);
        }
    }

    #[test]
    fn parse_unknown_format_fails() {
        let result = OutputFormat::parse("emacs");
        assert!(matches!(result, Err(Error::UnknownFormat { name }) if name == "emacs"));
    }

    #[test]
    fn output_dir_only_for_multi_file() {
        assert_eq!(OutputFormat::Claude.output_dir(), None);
        assert_eq!(OutputFormat::Cursor.output_dir(), Some(".cursor/rules"));
        assert_eq!(OutputFormat::AmazonQ.output_dir(), Some(".amazonq/rules"));
    }
}
