//! Git pre-commit hook installation.
//!
//! The hook calls `docgate check`, which runs the gate against the index and
//! exits non-zero on denial. Foreign hook content is preserved.

use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Error;

/// Marker identifying our lines in a shared hook file.
const MARKER: &str = "docgate";

/// Pre-commit hook section.
const PRE_COMMIT_HOOK: &str = r#"#!/bin/sh
# docgate documentation gate (auto-installed)
# Blocks the commit when required feature documents are missing

docgate check || exit 1
"#;

fn pre_commit_path(project_root: &Path) -> PathBuf {
    project_root.join(".git").join("hooks").join("pre-commit")
}

/// Check if git is initialized in the project.
pub fn has_git(project_root: &Path) -> bool {
    project_root.join(".git").is_dir()
}

/// Check if our pre-commit hook is installed.
pub fn hook_installed(project_root: &Path) -> bool {
    fs::read_to_string(pre_commit_path(project_root))
        .map(|content| content.contains(MARKER))
        .unwrap_or(false)
}

/// Install the pre-commit hook. Returns `false` if it was already present.
pub fn install_hook(project_root: &Path) -> Result<bool, Error> {
    if !has_git(project_root) {
        return Err(Error::NotGitRepo(project_root.to_path_buf()));
    }

    if hook_installed(project_root) {
        return Ok(false);
    }

    let path = pre_commit_path(project_root);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let final_content = if path.exists() {
        let existing = fs::read_to_string(&path)?;
        // Append without a second shebang
        let section = PRE_COMMIT_HOOK.trim_start_matches("#!/bin/sh\n");
        format!("{}\n\n{}", existing.trim_end(), section)
    } else {
        PRE_COMMIT_HOOK.to_string()
    };

    fs::write(&path, &final_content)?;
    make_executable(&path)?;
    info!(path = %path.display(), "Installed pre-commit hook");
    Ok(true)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), Error> {
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), Error> {
    Ok(())
}

/// Remove our section, deleting the file if nothing else is left.
/// Returns `false` if there was nothing to remove.
pub fn uninstall_hook(project_root: &Path) -> Result<bool, Error> {
    let path = pre_commit_path(project_root);
    if !path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(&path)?;
    if !content.contains(MARKER) {
        return Ok(false);
    }

    let cleaned = remove_section(&content);
    if cleaned.trim().is_empty() || cleaned.trim() == "#!/bin/sh" {
        fs::remove_file(&path)?;
    } else {
        fs::write(&path, format!("{}\n", cleaned.trim_end()))?;
    }
    info!(path = %path.display(), "Removed pre-commit hook");
    Ok(true)
}

fn remove_section(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.contains(MARKER) && !line.contains("required feature documents"))
        .collect::<Vec<_>>()
        .join("\n")
}
