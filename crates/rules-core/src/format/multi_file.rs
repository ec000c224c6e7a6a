//! Multi-file planner
//!
//! Mirrors each rule into its own file under the format's output
//! directory, byte-for-byte. No header and no trimming: downstream tools
//! read these files as-is, so the source bytes are authoritative.

use crate::intent::WriteIntent;
use crate::rule::Rule;
use rules_fs::NormalizedPath;

#[derive(Debug, Clone, Copy)]
pub(crate) struct MultiFileTarget {
    /// Output directory, relative to the project root.
    pub output_dir: &'static str,
    /// Collapse each rule's relative path into a flat file name
    /// (`dir/a.md` becomes `dir-a.md`) for tools that do not read
    /// nested directories.
    pub flatten: bool,
}

pub(crate) fn plan(
    target: &MultiFileTarget,
    project_root: &NormalizedPath,
    rules: &[Rule],
) -> Vec<WriteIntent> {
    let out_root = project_root.join(target.output_dir);
    rules
        .iter()
        .map(|rule| {
            let relative = if target.flatten {
                rule.path.replace('/', "-")
            } else {
                rule.path.clone()
            };
            WriteIntent::new(out_root.join(&relative), rule.content.clone())
        })
        .collect()
}
