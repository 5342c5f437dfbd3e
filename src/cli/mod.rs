//! CLI commands for docgate.

pub mod check;
pub mod config;
pub mod hooks;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// docgate - pre-commit documentation gate
#[derive(Parser)]
#[command(name = "docgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Handle a hook payload on stdin (default)
    Hook,

    /// Run the gate against the staged files and print the report
    Check {
        /// Project root (defaults to the current directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Skip the compile check
        #[arg(long)]
        no_build: bool,
    },

    /// Install the git pre-commit hook
    Install {
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Remove the git pre-commit hook
    Uninstall {
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config {
        #[arg(long)]
        root: Option<PathBuf>,
    },
}
