//! List command implementation

use colored::Colorize;

use rules_core::load_rules;
use rules_fs::NormalizedPath;

use super::load_engine;
use crate::error::Result;

/// Run the list command
///
/// Shows which rules each configured project selects, without writing
/// anything.
pub fn run_list(config_path: &str) -> Result<()> {
    let (config, engine) = load_engine(config_path)?;

    println!(
        "{} {}",
        "source".green().bold(),
        NormalizedPath::new(&config.source.dir)
    );

    for project in &config.projects {
        println!();
        println!("{} {}", "=>".blue().bold(), project.path.cyan());
        println!("   formats: {}", project.formats.join(", ").dimmed());

        let loaded = load_rules(engine.source_root(), &project.rules)?;
        for rule in &loaded.rules {
            println!("   {} {}", "-".green(), rule.path);
        }
        for pattern in &loaded.unmatched_patterns {
            println!(
                "   {} pattern matched no files: {}",
                "?".yellow(),
                pattern.yellow()
            );
        }
        if loaded.rules.is_empty() {
            println!("   {}", "no rules selected".dimmed());
        }
    }

    Ok(())
}
