//! Compile check.
//!
//! Detects Gradle or Maven at the project root and runs a compile-only task
//! under a hard timeout. The child is spawned with `kill_on_drop`, so when the
//! timeout fires and the wait future is dropped the process is killed.

use std::fmt;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::BuildConfig;

/// Supported build tools, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildTool {
    Gradle,
    Maven,
}

impl BuildTool {
    /// Wrapper script or descriptor whose presence selects the tool.
    pub fn descriptor(self) -> &'static str {
        match self {
            Self::Gradle => "gradlew",
            Self::Maven => "pom.xml",
        }
    }

    /// Default compile-only command line.
    pub fn compile_command(self) -> Vec<String> {
        let argv: &[&str] = match self {
            Self::Gradle => &["./gradlew", "compileJava", "-q"],
            Self::Maven => &["mvn", "compile", "-q"],
        };
        argv.iter().map(|s| s.to_string()).collect()
    }

    /// First tool whose descriptor exists under `project_root`.
    pub fn detect(project_root: &Path) -> Option<Self> {
        [Self::Gradle, Self::Maven]
            .into_iter()
            .find(|tool| project_root.join(tool.descriptor()).exists())
    }
}

impl fmt::Display for BuildTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gradle => f.write_str("Gradle"),
            Self::Maven => f.write_str("Maven"),
        }
    }
}

/// Result of the compile check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// No build descriptor found, or the check is disabled.
    Skipped,
    Success,
    /// Carries a bounded diagnostic.
    Failed(String),
}

impl BuildOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// First `limit` characters of `text`, on a char boundary.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Run the compile check for `project_root`.
pub async fn verify(project_root: &Path, config: &BuildConfig) -> BuildOutcome {
    if !config.enabled {
        debug!("Build check disabled");
        return BuildOutcome::Skipped;
    }

    let Some(tool) = BuildTool::detect(project_root) else {
        debug!("No build descriptor found, skipping build check");
        return BuildOutcome::Skipped;
    };

    let argv = config
        .command
        .clone()
        .filter(|argv| !argv.is_empty())
        .unwrap_or_else(|| tool.compile_command());

    info!(tool = %tool, command = ?argv, "Running compile check");
    run_compile(project_root, tool, &argv, config).await
}

async fn run_compile(
    project_root: &Path,
    tool: BuildTool,
    argv: &[String],
    config: &BuildConfig,
) -> BuildOutcome {
    let child = match Command::new(&argv[0])
        .args(&argv[1..])
        .current_dir(project_root)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            warn!(error = %e, "Failed to start build tool");
            return BuildOutcome::Failed(format!(
                "{} build could not start `{}`: {}",
                tool, argv[0], e
            ));
        }
    };

    let timeout = config.timeout();
    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            warn!(error = %e, "Failed to wait for build tool");
            return BuildOutcome::Failed(format!("{} build failed: {}", tool, e));
        }
        Err(_) => {
            warn!(secs = timeout.as_secs(), "Build timed out");
            return BuildOutcome::Failed(format!(
                "{} build timed out after {}s",
                tool,
                timeout.as_secs()
            ));
        }
    };

    if output.status.success() {
        return BuildOutcome::Success;
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let excerpt = truncate_chars(stderr.trim(), config.diagnostic_limit);
    debug!(code = ?output.status.code(), "Build failed");
    BuildOutcome::Failed(format!("{} build failed:\n{}", tool, excerpt))
}
