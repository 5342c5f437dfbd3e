//! Direct gate run, for git's own pre-commit hook.

use std::path::Path;

use crate::config::GateConfig;
use crate::error::Error;
use crate::gate::{self, Verdict};

/// Run the gate and print the report. Returns the process exit code.
pub async fn run(project_root: &Path, skip_build: bool) -> Result<i32, Error> {
    let mut config = GateConfig::load(project_root)?;
    if skip_build {
        config.build.enabled = false;
    }

    match gate::run(project_root, &config).await {
        Verdict::Allow => Ok(0),
        Verdict::Deny(report) => {
            println!("{}", report);
            Ok(1)
        }
    }
}
