//! Sync command implementation

use colored::Colorize;

use rules_core::SyncOptions;

use super::load_engine;
use crate::error::{CliError, Result};

/// Run the sync command
///
/// Renders the configured rule set into every configured project. With
/// `dry_run` the write plan is printed without touching any project.
pub fn run_sync(config_path: &str, dry_run: bool, verbose: bool) -> Result<()> {
    let (config, engine) = load_engine(config_path)?;

    if config.projects.is_empty() {
        println!("{} No projects configured. Nothing to sync.", "OK".green().bold());
        return Ok(());
    }

    let options = SyncOptions { dry_run, verbose };
    let mut failures = Vec::new();

    for project in &config.projects {
        let label = if dry_run { "PLAN" } else { "SYNC" };
        println!("{} {}", format!("[{label}]").blue().bold(), project.path.cyan());

        match engine.sync_project(project, &options) {
            Ok(report) => {
                for path in &report.written {
                    let marker = if dry_run { "~" } else { "+" };
                    println!("   {} {}", marker.green(), path);
                }
                for pattern in &report.unmatched_patterns {
                    println!(
                        "   {} pattern matched no files: {}",
                        "?".yellow(),
                        pattern.yellow()
                    );
                }
            }
            Err(e) => {
                println!("   {} {}", "!".red(), e);
                failures.push(project.path.clone());
            }
        }
    }

    if failures.is_empty() {
        println!("{} Synchronization complete.", "OK".green().bold());
        Ok(())
    } else {
        Err(CliError::user(format!(
            "Synchronization failed for {} project(s)",
            failures.len()
        )))
    }
}
