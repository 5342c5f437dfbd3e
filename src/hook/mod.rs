//! Hook-framework boundary.
//!
//! Reads one JSON payload, decides whether it is a commit, runs the gate and
//! returns the response to print, if any. The process exit code is always 0;
//! the decision lives in the payload.

pub mod classify;
pub mod payload;

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::GateConfig;
use crate::error::Error;
use crate::gate::{self, Verdict};

pub use classify::is_commit_command;
pub use payload::{HookInput, HookOutput};

/// Environment variable naming the project root.
pub const PROJECT_DIR_ENV: &str = "CLAUDE_PROJECT_DIR";

/// Project root: explicit override, then the payload's `cwd`, then the
/// process working directory.
pub fn resolve_project_root(
    override_root: Option<PathBuf>,
    input: &HookInput,
) -> Result<PathBuf, Error> {
    if let Some(root) = override_root {
        return Ok(root);
    }
    if let Some(cwd) = input.cwd.as_deref().filter(|c| !c.is_empty()) {
        return Ok(PathBuf::from(cwd));
    }
    Ok(std::env::current_dir()?)
}

/// Handle one raw payload.
///
/// `Err` means the payload could not be understood; callers let the tool call
/// proceed. `Ok(None)` is an allow, `Ok(Some(_))` a denial to print.
pub async fn handle(raw: &str, override_root: Option<PathBuf>) -> Result<Option<HookOutput>, Error> {
    let input = HookInput::parse(raw)?;

    if !input.is_shell_tool() {
        debug!(tool = ?input.tool_name, "Not a shell tool, skipping");
        return Ok(None);
    }

    if !is_commit_command(&input.tool_input.command) {
        debug!(command = %input.tool_input.command, "Not a commit, skipping");
        return Ok(None);
    }

    let project_root = resolve_project_root(override_root, &input)?;
    let config = GateConfig::load(&project_root)?;

    match gate::run(&project_root, &config).await {
        Verdict::Allow => Ok(None),
        Verdict::Deny(report) => {
            warn!(root = %project_root.display(), "Commit denied");
            Ok(Some(HookOutput::deny(report)))
        }
    }
}
