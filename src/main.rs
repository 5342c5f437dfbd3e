//! docgate - pre-commit documentation gate.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use docgate::cli::{self, Cli, Commands};
use docgate::hook;
use docgate::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Stdout carries the hook response, so logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docgate=warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Hook) {
        Commands::Hook => run_hook().await,
        Commands::Check { root, no_build } => {
            let root = project_root(root)?;
            let exit_code = cli::check::run(&root, no_build).await?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
        Commands::Install { root } => {
            let root = project_root(root)?;
            if cli::hooks::install_hook(&root)? {
                println!("Pre-commit hook installed.");
            } else {
                println!("Pre-commit hook already installed.");
            }
            Ok(())
        }
        Commands::Uninstall { root } => {
            let root = project_root(root)?;
            if cli::hooks::uninstall_hook(&root)? {
                println!("Pre-commit hook removed.");
            } else {
                println!("No docgate pre-commit hook found.");
            }
            Ok(())
        }
        Commands::Config { root } => cli::config::show(&project_root(root)?),
    }
}

fn project_root(root: Option<PathBuf>) -> Result<PathBuf, Error> {
    match root {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}

/// Hook mode never fails the process: unreadable input lets the tool call
/// proceed, and a denial is reported in the JSON payload.
async fn run_hook() -> Result<(), Error> {
    let mut raw = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut raw) {
        debug!(error = %e, "Failed to read hook input");
        return Ok(());
    }

    let env_root = std::env::var_os(hook::PROJECT_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);

    match hook::handle(&raw, env_root).await {
        Ok(Some(output)) => match output.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => warn!(error = %e, "Failed to encode hook response"),
        },
        Ok(None) => {}
        Err(e) => debug!(error = %e, "Ignoring hook input"),
    }
    Ok(())
}
