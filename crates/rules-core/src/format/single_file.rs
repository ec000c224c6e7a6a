//! Single-file planner
//!
//! Renders the whole rule set as one generated document: a title, a
//! regeneration notice, and the trimmed rule bodies joined by horizontal
//! rules. The output file always exists: an empty rule set still plans
//! one write carrying a placeholder, so a stale document never survives a
//! sync that selected nothing.

use crate::intent::WriteIntent;
use crate::rule::Rule;
use rules_fs::NormalizedPath;

/// Guidance line placed between the title and the rule bodies.
const REGENERATE_NOTICE: &str =
    "To modify rules, edit the source .md files and run sync to regenerate.";

/// Placeholder body when no rule survives filtering.
const EMPTY_NOTICE: &str = "No rules configured.";

/// Separator between rule bodies.
const RULE_SEPARATOR: &str = "\n\n---\n\n";

#[derive(Debug, Clone, Copy)]
pub(crate) struct SingleFileTarget {
    /// Output file, relative to the project root.
    pub file_name: &'static str,
    /// Heading of the generated document.
    pub title: &'static str,
}

pub(crate) fn plan(
    target: &SingleFileTarget,
    project_root: &NormalizedPath,
    rules: &[Rule],
    exclude: &[glob::Pattern],
) -> Vec<WriteIntent> {
    let selected: Vec<&Rule> = rules
        .iter()
        .filter(|rule| !exclude.iter().any(|pattern| pattern.matches(&rule.path)))
        .collect();

    let mut content = format!("# {}\n\n", target.title);
    if selected.is_empty() {
        content.push_str(EMPTY_NOTICE);
        content.push('\n');
    } else {
        content.push_str(REGENERATE_NOTICE);
        content.push_str("\n\n");
        let bodies: Vec<&str> = selected.iter().map(|rule| rule.content.trim()).collect();
        content.push_str(&bodies.join(RULE_SEPARATOR));
        content.push('\n');
    }

    vec![WriteIntent::new(project_root.join(target.file_name), content)]
}
