//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// Rule Sync - distribute canonical rule documents into client projects
#[derive(Parser, Debug)]
#[command(name = "rules")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration manifest
    #[arg(short, long, global = true, default_value = "rules.toml", env = "RULES_CONFIG")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Render rules into every configured project
    Sync {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,
    },

    /// Check configured projects for drift
    Check {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List the rules each project selects
    List,
}
