//! Staged change set.
//!
//! Lists the index against HEAD with `git diff --cached --name-status` and
//! filters it down to product source files.

use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::config::SourcesConfig;

/// How a path is staged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StagedStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
    Other,
}

impl StagedStatus {
    fn from_code(code: &str) -> Self {
        match code.chars().next() {
            Some('A') => Self::Added,
            Some('M') => Self::Modified,
            Some('D') => Self::Deleted,
            Some('R') => Self::Renamed,
            _ => Self::Other,
        }
    }
}

/// A staged path, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StagedFile {
    pub path: String,
    pub status: StagedStatus,
}

impl StagedFile {
    pub fn new(path: impl Into<String>, status: StagedStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }

    pub fn modified(path: impl Into<String>) -> Self {
        Self::new(path, StagedStatus::Modified)
    }
}

/// Query git for the staged set.
///
/// Any failure (git missing, not a repository, non-zero exit) yields an empty
/// set: the gate never blocks because it could not list changes.
pub fn staged_files(project_root: &Path) -> Vec<StagedFile> {
    let output = match Command::new("git")
        .args(["diff", "--cached", "--name-status"])
        .current_dir(project_root)
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            warn!(error = %e, "Failed to run git, assuming nothing staged");
            return Vec::new();
        }
    };

    if !output.status.success() {
        debug!(
            code = ?output.status.code(),
            "git diff --cached failed, assuming nothing staged"
        );
        return Vec::new();
    }

    parse_name_status(&String::from_utf8_lossy(&output.stdout))
}

/// Parse `--name-status` output into a sorted, de-duplicated list.
///
/// Renames and copies list two paths; the destination is kept.
pub fn parse_name_status(listing: &str) -> Vec<StagedFile> {
    let mut files: Vec<StagedFile> = listing
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let mut fields = line.split('\t');
            let code = fields.next()?;
            let path = fields.last()?.trim();
            if path.is_empty() {
                return None;
            }
            Some(StagedFile::new(path, StagedStatus::from_code(code)))
        })
        .collect();

    files.sort();
    files.dedup_by(|a, b| a.path == b.path);
    files
}

/// Whether a staged path is product source under the main root.
pub fn is_product_source(path: &str, sources: &SourcesConfig) -> bool {
    let extension = format!(".{}", sources.extension);
    path.ends_with(&extension)
        && path.contains(&sources.main_root)
        && !path
            .to_lowercase()
            .contains(&sources.exclude_marker.to_lowercase())
}

/// Paths of staged product source files, in staged-set order.
pub fn product_sources<'a>(staged: &'a [StagedFile], sources: &SourcesConfig) -> Vec<&'a str> {
    staged
        .iter()
        .map(|f| f.path.as_str())
        .filter(|path| is_product_source(path, sources))
        .collect()
}
