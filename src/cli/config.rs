//! Show the effective configuration.

use std::path::Path;

use crate::config::GateConfig;
use crate::error::Error;

/// Print the config that a gate run in `project_root` would use.
pub fn show(project_root: &Path) -> Result<(), Error> {
    let project = GateConfig::project_path(project_root);
    if project.exists() {
        println!("# Project config: {}", project.display());
    } else if let Some(global) = GateConfig::global_path().filter(|p| p.exists()) {
        println!("# Global config: {}", global.display());
    } else {
        println!("# No config file found, showing defaults.");
        println!("# Create one at: {}", project.display());
    }
    println!();

    let config = GateConfig::load(project_root)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
