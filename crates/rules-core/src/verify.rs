//! Drift verification
//!
//! Compares a freshly derived write plan against what a project actually
//! contains. Content comparison happens after whitespace normalization so
//! editor-introduced line-ending or trailing-space churn does not count
//! as drift, while any semantic change does.

use std::collections::BTreeSet;
use std::fs;

use ignore::WalkBuilder;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::format::OutputFormat;
use crate::intent::WriteIntent;
use rules_fs::NormalizedPath;

/// How an on-disk target diverges from its expected rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Expected file is absent.
    Missing,
    /// Present but content differs after normalization.
    Modified,
    /// Present on disk but not among the expected paths
    /// (multi-file formats only).
    Extra,
}

/// One divergence between expected and actual state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationIssue {
    pub kind: IssueKind,
    pub path: NormalizedPath,
}

/// Outcome of verifying one project/format pair.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationResult {
    /// True iff `issues` is empty.
    pub synced: bool,
    pub issues: Vec<VerificationIssue>,
}

impl VerificationResult {
    pub fn from_issues(issues: Vec<VerificationIssue>) -> Self {
        Self {
            synced: issues.is_empty(),
            issues,
        }
    }
}

/// Diff freshly derived `expected` intents against the filesystem.
///
/// For multi-file formats the format's output directory is additionally
/// swept for files outside the expected set; an output directory that
/// does not exist yet yields an empty extra list, not an error.
pub fn compare(
    format: OutputFormat,
    project_root: &NormalizedPath,
    expected: &[WriteIntent],
) -> Result<VerificationResult> {
    let mut issues = Vec::new();
    let mut expected_paths: BTreeSet<String> = BTreeSet::new();

    for intent in expected {
        expected_paths.insert(intent.path.as_str().to_string());

        match fs::read_to_string(intent.path.to_native()) {
            Err(_) => issues.push(VerificationIssue {
                kind: IssueKind::Missing,
                path: intent.path.clone(),
            }),
            Ok(actual) => {
                let expected_sum = content_checksum(&normalize_content(&intent.content));
                let actual_sum = content_checksum(&normalize_content(&actual));
                if expected_sum != actual_sum {
                    issues.push(VerificationIssue {
                        kind: IssueKind::Modified,
                        path: intent.path.clone(),
                    });
                }
            }
        }
    }

    if let Some(output_dir) = format.output_dir() {
        let out_root = project_root.join(output_dir);
        for present in files_under(&out_root) {
            if !expected_paths.contains(present.as_str()) {
                issues.push(VerificationIssue {
                    kind: IssueKind::Extra,
                    path: present,
                });
            }
        }
    }

    Ok(VerificationResult::from_issues(issues))
}

/// All regular files under `root`, or nothing if the directory is absent.
fn files_under(root: &NormalizedPath) -> Vec<NormalizedPath> {
    if !root.is_dir() {
        return Vec::new();
    }

    let walker = WalkBuilder::new(root.to_native())
        .hidden(false)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(true)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if entry.file_type().is_some_and(|t| t.is_file()) {
            files.push(NormalizedPath::new(entry.path()));
        }
    }
    files
}

/// Normalize content for drift comparison.
///
/// CRLF becomes LF, trailing whitespace is trimmed per line, and blank
/// lines at the start and end of the document are dropped. Leading
/// whitespace within a line is preserved because indentation inside code
/// blocks is significant.
pub fn normalize_content(content: &str) -> String {
    let unified = content.replace("\r\n", "\n");
    let lines: Vec<&str> = unified.split('\n').map(|line| line.trim_end()).collect();

    let mut start = 0;
    let mut end = lines.len();
    while start < end && lines[start].is_empty() {
        start += 1;
    }
    while end > start && lines[end - 1].is_empty() {
        end -= 1;
    }

    lines[start..end].join("\n")
}

/// Hex SHA-256 of `content`.
pub fn content_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_unifies_line_endings() {
        assert_eq!(normalize_content("a\r\nb\r\n"), "a\nb");
    }

    #[test]
    fn normalize_trims_trailing_whitespace_per_line() {
        assert_eq!(normalize_content("a   \nb\t\n"), "a\nb");
    }

    #[test]
    fn normalize_drops_surrounding_blank_lines() {
        assert_eq!(normalize_content("\n\n# Title\n\nbody\n\n\n"), "# Title\n\nbody");
    }

    #[test]
    fn normalize_preserves_leading_indentation() {
        assert_eq!(normalize_content("    indented code\n"), "    indented code");
    }

    #[test]
    fn normalize_preserves_interior_blank_lines() {
        assert_eq!(normalize_content("a\n\n\nb"), "a\n\n\nb");
    }

    #[test]
    fn checksum_is_stable() {
        assert_eq!(
            content_checksum("hello world"),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }
}
