//! Path guards bounding every write the engine performs.
//!
//! A [`PathGuard`] validates candidate paths against a fixed set of allowed
//! root directories. A [`PlannedPathGuard`] is the strictly narrower form
//! used immediately before execution: it accepts only the exact paths of a
//! previously announced write plan.
//!
//! Both guards are immutable after construction. Widening an existing guard
//! is not possible; [`PathGuard::with_root`] returns a new guard instead.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::path::NormalizedPath;

/// Validates paths against a set of allowed root directories.
///
/// Containment is decided component-wise, never by string prefix, so a
/// sibling directory sharing a textual prefix with a root (`/home/user2`
/// against root `/home/user`) is rejected.
#[derive(Debug, Clone)]
pub struct PathGuard {
    roots: Vec<NormalizedPath>,
}

impl PathGuard {
    /// Create a guard from a list of allowed root directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRootsProvided`] for an empty list and
    /// [`Error::RootNotAbsolute`] if any root is a relative path.
    pub fn new(roots: &[NormalizedPath]) -> Result<Self> {
        if roots.is_empty() {
            return Err(Error::NoRootsProvided);
        }

        let mut canonical_roots = Vec::with_capacity(roots.len());
        for root in roots {
            let expanded = NormalizedPath::new(expand_home(root.as_str().trim()));
            if !expanded.is_absolute() {
                return Err(Error::RootNotAbsolute {
                    root: root.as_str().to_string(),
                });
            }
            canonical_roots.push(canonicalize_input(expanded.as_str())?);
        }

        Ok(Self {
            roots: canonical_roots,
        })
    }

    /// Return a new guard whose root set additionally contains `root`.
    ///
    /// The receiver is left untouched; callers holding the old guard keep
    /// its original, narrower root set.
    pub fn with_root(&self, root: &NormalizedPath) -> Result<Self> {
        let mut roots = self.roots.clone();
        roots.push(root.clone());
        Self::new(&roots)
    }

    /// The canonical roots this guard accepts.
    pub fn roots(&self) -> &[NormalizedPath] {
        &self.roots
    }

    /// Canonicalize `input` and check that it lies within an allowed root.
    ///
    /// A path equal to a root is accepted. Paths that do not exist yet are
    /// accepted in their lexically resolved form so new files can be
    /// created; existing paths have symlinks resolved first.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPath`] on empty/whitespace input,
    /// [`Error::OutsideAllowedRoots`] when containment fails.
    pub fn validate(&self, input: &str) -> Result<NormalizedPath> {
        let candidate = canonicalize_input(input)?;

        if self
            .roots
            .iter()
            .any(|root| is_contained(root.as_str(), candidate.as_str()))
        {
            Ok(candidate)
        } else {
            tracing::debug!(path = %candidate, "rejected: outside allowed roots");
            Err(Error::outside(candidate.as_str()))
        }
    }

    /// Non-failing form of [`PathGuard::validate`] for advisory checks.
    pub fn is_inside(&self, input: &str) -> bool {
        self.validate(input).is_ok()
    }
}

/// Validates paths against an exact set of planned write targets.
///
/// Built from the paths of an announced write plan; `validate` accepts
/// exact membership only. Even a buggy planner upstream cannot smuggle a
/// write past the plan it announced.
#[derive(Debug, Clone)]
pub struct PlannedPathGuard {
    planned: BTreeSet<String>,
}

impl PlannedPathGuard {
    /// Create a guard from the exact paths of a write plan.
    ///
    /// An empty plan is valid; the resulting guard rejects every path.
    pub fn new<'a, I>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a NormalizedPath>,
    {
        let mut planned = BTreeSet::new();
        for path in paths {
            planned.insert(canonicalize_input(path.as_str())?.as_str().to_string());
        }
        Ok(Self { planned })
    }

    /// Canonicalize `input` and check exact membership in the plan.
    pub fn validate(&self, input: &str) -> Result<NormalizedPath> {
        let candidate = canonicalize_input(input)?;
        if self.planned.contains(candidate.as_str()) {
            Ok(candidate)
        } else {
            Err(Error::outside(candidate.as_str()))
        }
    }

    /// Non-failing form of [`PlannedPathGuard::validate`].
    pub fn is_inside(&self, input: &str) -> bool {
        self.validate(input).is_ok()
    }

    /// Number of planned paths.
    pub fn len(&self) -> usize {
        self.planned.len()
    }

    /// Whether the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.planned.is_empty()
    }
}

/// Canonicalize raw input to an absolute, dot-free normalized path.
///
/// Expands a leading `~`, resolves `.` and `..` segments lexically, and
/// opportunistically resolves symlinks through the deepest existing
/// ancestor. Input that names a not-yet-existing file keeps its lexical
/// tail so the path can still be created later.
pub(crate) fn canonicalize_input(input: &str) -> Result<NormalizedPath> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidPath);
    }

    let expanded = expand_home(trimmed);
    let slashed = expanded.replace('\\', "/");

    let absolute = if NormalizedPath::new(slashed.as_str()).is_absolute() {
        slashed
    } else {
        let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        format!(
            "{}/{}",
            NormalizedPath::new(&cwd).as_str().trim_end_matches('/'),
            slashed
        )
    };

    let resolved = resolve_dots(&absolute);
    Ok(resolve_existing_prefix(&resolved))
}

/// Expand a leading `~` or `~/` to the user's home directory.
fn expand_home(input: &str) -> String {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home.to_string_lossy().into_owned();
        }
    } else if let Some(rest) = input.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return format!("{}/{}", home.to_string_lossy(), rest);
    }
    input.to_string()
}

/// Lexically resolve `.` and `..` segments of an absolute forward-slash path.
///
/// `..` never climbs above the root (or drive prefix).
fn resolve_dots(absolute: &str) -> String {
    let (prefix, remainder) = match absolute.find('/') {
        Some(0) => ("", absolute),
        Some(idx) => (&absolute[..idx], &absolute[idx..]),
        None => (absolute, ""),
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in remainder.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    format!("{}/{}", prefix, segments.join("/"))
}

/// Resolve symlinks for the deepest existing ancestor of `resolved`.
///
/// Keeps the not-yet-existing tail lexical.
fn resolve_existing_prefix(resolved: &str) -> NormalizedPath {
    let native = Path::new(resolved);

    if let Ok(real) = dunce::canonicalize(native) {
        return NormalizedPath::new(real);
    }

    let mut current = native.parent();
    while let Some(dir) = current {
        if let Ok(real) = dunce::canonicalize(dir) {
            if let Ok(rest) = native.strip_prefix(dir) {
                return NormalizedPath::new(real.join(rest));
            }
            break;
        }
        current = dir.parent();
    }

    NormalizedPath::new(resolved)
}

/// Component-wise containment check.
///
/// `path` is inside `root` iff every component of `root` is a prefix of
/// the components of `path`, in order. Equality counts as contained.
fn is_contained(root: &str, path: &str) -> bool {
    let root_segments: Vec<&str> = root.split('/').filter(|s| !s.is_empty()).collect();
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    path_segments.len() >= root_segments.len()
        && root_segments
            .iter()
            .zip(&path_segments)
            .all(|(a, b)| a == b)
}
