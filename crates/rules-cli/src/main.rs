//! Rule Sync CLI
//!
//! The command-line interface for distributing rule documents into client
//! projects and checking them for drift.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Sync { dry_run }) => {
            commands::run_sync(&cli.config, dry_run, cli.verbose)
        }
        Some(Commands::Check { json }) => commands::run_check(&cli.config, json),
        Some(Commands::List) => commands::run_list(&cli.config),
        None => {
            println!("{} Rule Sync CLI", "rules".green().bold());
            println!();
            println!("Run {} for available commands.", "rules --help".cyan());
            Ok(())
        }
    }
}
