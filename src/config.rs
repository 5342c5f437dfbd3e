//! Gate configuration.
//!
//! Handles loading `.docgate/config.toml`, with `~/.docgate/config.toml` as a
//! fallback. Every field has a default, so an empty or missing file yields the
//! stock Java/Gradle/Maven layout.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Error;

/// Directory holding docgate files, relative to a project root or home.
const CONFIG_DIR: &str = ".docgate";

/// Config file name inside [`CONFIG_DIR`].
const CONFIG_FILE: &str = "config.toml";

/// Effective gate configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateConfig {
    /// Which staged files count as product source.
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Feature inference settings.
    #[serde(default)]
    pub features: FeaturesConfig,

    /// Required documentation layout.
    #[serde(default)]
    pub docs: DocsConfig,

    /// Compile check settings.
    #[serde(default)]
    pub build: BuildConfig,
}

/// Source file filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Source extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Path fragment marking the main (non-test) source root.
    #[serde(default = "default_main_root")]
    pub main_root: String,

    /// Case-insensitive path fragment that excludes a file.
    #[serde(default = "default_exclude_marker")]
    pub exclude_marker: String,
}

/// Feature inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturesConfig {
    /// Architectural-layer package names. The segment before one of these is
    /// taken as the feature.
    #[serde(default = "default_layers")]
    pub layers: Vec<String>,
}

/// Documentation layout, relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    #[serde(default = "default_docs_root")]
    pub root: String,

    /// Project-wide error catalog, inside `root`.
    #[serde(default = "default_error_catalog")]
    pub error_catalog: String,

    /// Suffix appended to the feature name for the spec document.
    #[serde(default = "default_spec_suffix")]
    pub spec_suffix: String,

    #[serde(default = "default_architecture_dir")]
    pub architecture_dir: String,

    #[serde(default = "default_user_guide_dir")]
    pub user_guide_dir: String,

    /// Document the denial footer points at.
    #[serde(default = "default_checklist")]
    pub checklist: String,
}

/// Compile check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Max characters of stderr kept in a failure report.
    #[serde(default = "default_diagnostic_limit")]
    pub diagnostic_limit: usize,

    /// Replaces the detected tool's compile command. Still only runs when a
    /// build descriptor is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_extension() -> String {
    "java".to_string()
}

fn default_main_root() -> String {
    "src/main".to_string()
}

fn default_exclude_marker() -> String {
    "test".to_string()
}

fn default_layers() -> Vec<String> {
    ["controller", "service", "repository", "dto", "entity", "mapper"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_docs_root() -> String {
    "src/docs".to_string()
}

fn default_error_catalog() -> String {
    "ERROR_MESSAGES.md".to_string()
}

fn default_spec_suffix() -> String {
    "_spec.md".to_string()
}

fn default_architecture_dir() -> String {
    "architecture".to_string()
}

fn default_user_guide_dir() -> String {
    "user-guide".to_string()
}

fn default_checklist() -> String {
    "CLAUDE.md (Feature Development Completion Checklist)".to_string()
}

fn default_timeout_secs() -> u64 {
    90
}

fn default_diagnostic_limit() -> usize {
    300
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            main_root: default_main_root(),
            exclude_marker: default_exclude_marker(),
        }
    }
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            layers: default_layers(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            root: default_docs_root(),
            error_catalog: default_error_catalog(),
            spec_suffix: default_spec_suffix(),
            architecture_dir: default_architecture_dir(),
            user_guide_dir: default_user_guide_dir(),
            checklist: default_checklist(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: default_timeout_secs(),
            diagnostic_limit: default_diagnostic_limit(),
            command: None,
        }
    }
}

impl BuildConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl GateConfig {
    /// Project config file path.
    pub fn project_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Global config file path (`~/.docgate/config.toml`).
    pub fn global_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the project config, then the global one, then defaults.
    pub fn load(project_root: &Path) -> Result<Self, Error> {
        let project = Self::project_path(project_root);
        if project.exists() {
            return Self::load_from(&project);
        }
        if let Some(global) = Self::global_path().filter(|p| p.exists()) {
            return Self::load_from(&global);
        }
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load a specific config file.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content).map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            message,
        })?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Render as TOML, for `docgate config`.
    pub fn to_toml(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(|e| Error::other(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = GateConfig::default();
        assert_eq!(config.sources.extension, "java");
        assert_eq!(config.docs.root, "src/docs");
        assert_eq!(config.build.timeout_secs, 90);
        assert_eq!(config.build.diagnostic_limit, 300);
        assert!(config.features.layers.contains(&"dto".to_string()));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = GateConfig::parse("[build]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.build.timeout_secs, 5);
        assert!(config.build.enabled);
        assert_eq!(config.docs.user_guide_dir, "user-guide");
    }

    #[test]
    fn test_load_project_file() {
        let dir = TempDir::new().unwrap();
        let path = GateConfig::project_path(dir.path());
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[docs]\nroot = \"docs\"\n").unwrap();

        let config = GateConfig::load(dir.path()).unwrap();
        assert_eq!(config.docs.root, "docs");
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[build\n").unwrap();

        let err = GateConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_toml_roundtrip_of_defaults() {
        let rendered = GateConfig::default().to_toml().unwrap();
        let parsed = GateConfig::parse(&rendered).unwrap();
        assert_eq!(parsed.docs.error_catalog, "ERROR_MESSAGES.md");
    }
}
