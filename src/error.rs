//! Error types for docgate.

use std::path::PathBuf;

use thiserror::Error;

/// Gate error type.
///
/// Policy violations are never errors; they travel as `CheckResult` values.
/// This type only covers failures to read input or configuration.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error in {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Not a git repository: {}", .0.display())]
    NotGitRepo(PathBuf),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
