//! Rule loading
//!
//! Resolves configured glob patterns against the central rule directory
//! into a sorted, deduplicated rule list, and reports positive patterns
//! that matched nothing in isolation (a stale or misspelled pattern stays
//! visible even when other patterns cover the same files).

use std::collections::BTreeSet;
use std::fs;

use ignore::WalkBuilder;

use crate::error::{Error, Result};
use crate::patterns::{PatternSet, compile_globs};
use crate::rule::Rule;
use rules_fs::NormalizedPath;

/// Outcome of one rule load.
#[derive(Debug, Clone)]
pub struct LoadedRules {
    /// Selected rules, sorted lexicographically by relative path.
    pub rules: Vec<Rule>,
    /// Positive patterns that matched no file on their own.
    pub unmatched_patterns: Vec<String>,
}

/// Load rules from `source_root` according to `patterns`.
///
/// Symlinks are followed; only regular files participate. A read failure
/// on any matched file aborts the whole load; a partial rule set is never
/// returned.
pub fn load_rules(source_root: &NormalizedPath, patterns: &[String]) -> Result<LoadedRules> {
    let set = PatternSet::split(patterns);
    let positive = compile_globs(&set.positive)?;
    let negative = compile_globs(&set.negative)?;

    let candidates = walk_files(source_root)?;

    let mut selected: BTreeSet<&str> = BTreeSet::new();
    for relative in &candidates {
        if positive.iter().any(|p| p.matches(relative))
            && !negative.iter().any(|p| p.matches(relative))
        {
            selected.insert(relative);
        }
    }

    // Each positive pattern is probed alone so stale patterns surface even
    // when another pattern covers the same files.
    let unmatched_patterns: Vec<String> = set
        .positive
        .iter()
        .zip(&positive)
        .filter(|(_, compiled)| !candidates.iter().any(|rel| compiled.matches(rel)))
        .map(|(raw, _)| raw.clone())
        .collect();

    let mut rules = Vec::with_capacity(selected.len());
    for relative in selected {
        let absolute = source_root.join(relative);
        let content = fs::read_to_string(absolute.to_native()).map_err(|e| Error::RuleRead {
            path: absolute.to_native(),
            source: e,
        })?;
        rules.push(Rule::new(relative, content));
    }

    tracing::debug!(
        matched = rules.len(),
        unmatched = unmatched_patterns.len(),
        source = %source_root,
        "loaded rules"
    );

    Ok(LoadedRules {
        rules,
        unmatched_patterns,
    })
}

/// Walk `root` and collect relative paths of all regular files.
fn walk_files(root: &NormalizedPath) -> Result<Vec<String>> {
    if !root.is_dir() {
        return Err(Error::SourceDirMissing {
            path: root.to_native(),
        });
    }

    let native_root = root.to_native();
    // Selection is driven by the configured globs alone; ignore files in
    // or above the source tree must not filter rules out.
    let walker = WalkBuilder::new(&native_root)
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
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(&native_root) {
            files.push(NormalizedPath::new(relative).as_str().to_string());
        }
    }

    Ok(files)
}
