//! Check command implementation

use colored::Colorize;
use serde::Serialize;

use rules_core::{FormatVerification, IssueKind};

use super::load_engine;
use crate::error::{CliError, Result};

#[derive(Serialize)]
struct ProjectReport<'a> {
    project: &'a str,
    formats: Vec<FormatVerification>,
}

/// Run the check command
///
/// Re-derives the expected state of every configured project and reports
/// drift. Exit code is non-zero when any project has drifted.
pub fn run_check(config_path: &str, json: bool) -> Result<()> {
    let (config, engine) = load_engine(config_path)?;

    let mut reports = Vec::new();
    for project in &config.projects {
        let formats = engine.verify_project(project)?;
        reports.push(ProjectReport {
            project: &project.path,
            formats,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        render_human(&reports);
    }

    let drifted = reports
        .iter()
        .flat_map(|r| &r.formats)
        .any(|f| !f.result.synced);
    if drifted {
        Err(CliError::user("Drift detected"))
    } else {
        Ok(())
    }
}

fn render_human(reports: &[ProjectReport<'_>]) {
    for report in reports {
        let project_synced = report.formats.iter().all(|f| f.result.synced);
        let status = if project_synced {
            "OK".green().bold()
        } else {
            "DRIFT".red().bold()
        };
        println!("{} {}", status, report.project.cyan());

        for format in &report.formats {
            if format.result.synced {
                continue;
            }
            for issue in &format.result.issues {
                let kind = match issue.kind {
                    IssueKind::Missing => "missing".yellow(),
                    IssueKind::Modified => "modified".red(),
                    IssueKind::Extra => "extra".red(),
                };
                println!("   {} [{}] {} ({})", "!".red(), format.format.dimmed(), issue.path, kind);
            }
        }
    }

    if reports
        .iter()
        .flat_map(|r| &r.formats)
        .any(|f| !f.result.synced)
    {
        println!();
        println!("Run {} to repair.", "rules sync".cyan());
    }
}
