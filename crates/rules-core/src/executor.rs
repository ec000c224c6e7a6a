//! Write plan execution
//!
//! Applies a batch of write intents to disk, or previews it in dry-run
//! mode. Every path is re-validated against the announced plan before any
//! I/O happens, and the batch aborts on the first failed write.

use std::fs;

use serde::Serialize;

use crate::error::{Error, Result, WriteAction};
use crate::intent::WriteIntent;
use rules_fs::{NormalizedPath, PlannedPathGuard, io};

/// Options controlling one execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecuteOptions {
    /// Preview only; no filesystem mutation.
    pub dry_run: bool,
    /// Emit one log line per intent.
    pub verbose: bool,
}

/// Outcome of one execution.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExecutionReport {
    /// Paths written, in intent order. In dry-run mode this is the full
    /// list as if the writes had happened.
    pub written: Vec<NormalizedPath>,
}

/// Apply `intents` to disk.
///
/// The whole batch is validated against a [`PlannedPathGuard`] built from
/// the intents themselves before the first write, so an invalid path in
/// entry 50 of 50 is caught before entry 1 is touched, in dry-run mode
/// too. Fail-fast: the first failed write aborts the batch; remaining
/// intents are not attempted and no partial success is reported.
pub fn execute(intents: &[WriteIntent], options: &ExecuteOptions) -> Result<ExecutionReport> {
    let guard = PlannedPathGuard::new(intents.iter().map(|intent| &intent.path))?;

    let mut targets = Vec::with_capacity(intents.len());
    for intent in intents {
        targets.push(guard.validate(intent.path.as_str())?);
    }

    let mut written = Vec::with_capacity(intents.len());
    for (intent, target) in intents.iter().zip(&targets) {
        if options.verbose {
            if options.dry_run {
                tracing::info!("[Dry-run] [Write] {}", target);
            } else {
                tracing::info!("Writing to: {}", target);
            }
        }

        if !options.dry_run {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent.to_native()).map_err(|e| Error::WriteFailure {
                    action: WriteAction::CreateDir,
                    path: parent.to_native(),
                    source: rules_fs::Error::io(parent.to_native(), e),
                })?;
            }
            io::write_text(target, &intent.content).map_err(|e| Error::WriteFailure {
                action: WriteAction::WriteFile,
                path: target.to_native(),
                source: e,
            })?;
        }

        written.push(target.clone());
    }

    Ok(ExecutionReport { written })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn intent(dir: &std::path::Path, relative: &str, content: &str) -> WriteIntent {
        WriteIntent::new(NormalizedPath::new(dir.join(relative)), content)
    }

    #[test]
    fn execute_writes_all_intents() {
        let dir = tempdir().unwrap();
        let intents = vec![
            intent(dir.path(), "CLAUDE.md", "# one"),
            intent(dir.path(), ".cursor/rules/a.md", "# two"),
        ];

        let report = execute(&intents, &ExecuteOptions::default()).unwrap();

        assert_eq!(report.written.len(), 2);
        assert_eq!(
            fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap(),
            "# one"
        );
        assert_eq!(
            fs::read_to_string(dir.path().join(".cursor/rules/a.md")).unwrap(),
            "# two"
        );
    }

    #[test]
    fn dry_run_mutates_nothing_but_reports_everything() {
        let dir = tempdir().unwrap();
        let intents = vec![intent(dir.path(), "CLAUDE.md", "# one")];

        let options = ExecuteOptions {
            dry_run: true,
            verbose: false,
        };
        let report = execute(&intents, &options).unwrap();

        assert_eq!(report.written.len(), 1);
        assert!(!dir.path().join("CLAUDE.md").exists());
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let report = execute(&[], &ExecuteOptions::default()).unwrap();
        assert!(report.written.is_empty());
    }

    #[test]
    fn invalid_path_anywhere_aborts_before_any_write() {
        let dir = tempdir().unwrap();
        let intents = vec![
            intent(dir.path(), "CLAUDE.md", "# one"),
            WriteIntent::new(NormalizedPath::new("   "), "# bad"),
        ];

        let result = execute(&intents, &ExecuteOptions::default());

        assert!(result.is_err());
        // The valid first intent must not have been applied.
        assert!(!dir.path().join("CLAUDE.md").exists());
    }

    #[test]
    fn failed_write_aborts_remaining_intents() {
        let dir = tempdir().unwrap();
        // A regular file where a parent directory is needed makes the
        // first write fail regardless of privileges.
        fs::write(dir.path().join("blocked"), "i am a file").unwrap();

        let intents = vec![
            intent(dir.path(), "blocked/first.md", "# fails"),
            intent(dir.path(), "second.md", "# skipped"),
        ];

        let result = execute(&intents, &ExecuteOptions::default());

        assert!(matches!(result, Err(Error::WriteFailure { .. })));
        assert!(!dir.path().join("second.md").exists());
    }
}
