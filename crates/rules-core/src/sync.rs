//! SyncEngine implementation
//!
//! The SyncEngine coordinates one sync operation per project: load rules
//! from the central source, plan each requested output format, and apply
//! or verify the combined write plan. Every planned path is checked
//! against a guard spanning the source root and the configured project
//! roots, so even a buggy planner cannot announce a write outside them.

use serde::Serialize;

use crate::config::{Config, ProjectConfig};
use crate::error::Result;
use crate::executor::{self, ExecuteOptions};
use crate::format::OutputFormat;
use crate::intent::WriteIntent;
use crate::loader;
use crate::patterns::compile_globs;
use crate::verify::{self, VerificationResult};
use rules_fs::{NormalizedPath, PathGuard};

/// Options for sync operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Simulate writes without modifying the filesystem.
    pub dry_run: bool,
    /// Emit one log line per planned write.
    pub verbose: bool,
}

/// The full write plan for one project.
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    /// Concatenated intents of every requested format, in format order.
    pub intents: Vec<WriteIntent>,
    /// Positive rule patterns that matched nothing.
    pub unmatched_patterns: Vec<String>,
}

/// Report from syncing one project.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    /// Paths written (or previewed in dry-run mode), in plan order.
    pub written: Vec<NormalizedPath>,
    /// Positive rule patterns that matched nothing.
    pub unmatched_patterns: Vec<String>,
}

/// Verification outcome for one format of a project.
#[derive(Debug, Clone, Serialize)]
pub struct FormatVerification {
    pub format: String,
    pub result: VerificationResult,
}

/// Engine for synchronizing rule renderings into client projects.
pub struct SyncEngine {
    source_root: NormalizedPath,
    guard: PathGuard,
}

impl SyncEngine {
    /// Create an engine for one configuration.
    ///
    /// Builds the allowed-root guard from the source directory and every
    /// configured project root, in that order. Construction fails if any
    /// configured path is relative.
    pub fn new(config: &Config) -> Result<Self> {
        let mut roots = vec![NormalizedPath::new(&config.source.dir)];
        roots.extend(
            config
                .projects
                .iter()
                .map(|project| NormalizedPath::new(&project.path)),
        );
        let guard = PathGuard::new(&roots)?;
        let source_root = guard.validate(config.source.dir.as_str())?;

        Ok(Self { source_root, guard })
    }

    /// The canonical rule source directory.
    pub fn source_root(&self) -> &NormalizedPath {
        &self.source_root
    }

    /// Derive the write plan for `project` without touching its files.
    ///
    /// Format names resolve before any filesystem access so an unknown
    /// format fails the project up front. Every planned intent is
    /// validated against the engine's root guard.
    pub fn plan_project(&self, project: &ProjectConfig) -> Result<ProjectPlan> {
        let project_root = self.guard.validate(&project.path)?;

        let formats = project
            .formats
            .iter()
            .map(|name| OutputFormat::parse(name))
            .collect::<Result<Vec<_>>>()?;
        let exclude = compile_globs(&project.exclude)?;

        let loaded = loader::load_rules(&self.source_root, &project.rules)?;

        let mut intents = Vec::new();
        for format in &formats {
            intents.extend(format.plan(&project_root, &loaded.rules, &exclude));
        }

        // A planner emitting a path outside the configured roots is a bug,
        // not a user error; abort before anything runs.
        for intent in &intents {
            self.guard.validate(intent.path.as_str())?;
        }

        tracing::debug!(
            project = %project_root,
            intents = intents.len(),
            "planned project writes"
        );

        Ok(ProjectPlan {
            intents,
            unmatched_patterns: loaded.unmatched_patterns,
        })
    }

    /// Plan and apply the writes for `project`.
    pub fn sync_project(
        &self,
        project: &ProjectConfig,
        options: &SyncOptions,
    ) -> Result<SyncReport> {
        let plan = self.plan_project(project)?;
        let report = executor::execute(
            &plan.intents,
            &ExecuteOptions {
                dry_run: options.dry_run,
                verbose: options.verbose,
            },
        )?;

        Ok(SyncReport {
            written: report.written,
            unmatched_patterns: plan.unmatched_patterns,
        })
    }

    /// Re-derive the expected state of `project` and diff it against disk.
    ///
    /// Rules are re-loaded fresh; nothing from a previous plan or sync is
    /// trusted. The executor is never invoked.
    pub fn verify_project(&self, project: &ProjectConfig) -> Result<Vec<FormatVerification>> {
        let project_root = self.guard.validate(&project.path)?;

        let formats = project
            .formats
            .iter()
            .map(|name| OutputFormat::parse(name))
            .collect::<Result<Vec<_>>>()?;
        let exclude = compile_globs(&project.exclude)?;

        let loaded = loader::load_rules(&self.source_root, &project.rules)?;

        let mut results = Vec::with_capacity(formats.len());
        for format in formats {
            let expected = format.plan(&project_root, &loaded.rules, &exclude);
            let result = verify::compare(format, &project_root, &expected)?;
            results.push(FormatVerification {
                format: format.name().to_string(),
                result,
            });
        }

        Ok(results)
    }
}
