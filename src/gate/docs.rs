//! Documentation policy.
//!
//! Presence checks only: a missing required document blocks, anything that
//! would need judging document content is a warning.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use crate::config::DocsConfig;
use crate::gate::features::FeatureId;
use crate::gate::staged::StagedFile;

/// Outcome of a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Pass,
    Warning(String),
    Blocking(String),
}

impl CheckResult {
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Blocking(_))
    }
}

/// Which rule produced a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckKind {
    Build,
    ErrorCatalog,
    FeatureDocs(FeatureId),
    StagedDocs,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build => f.write_str("build"),
            Self::ErrorCatalog => f.write_str("error-catalog"),
            Self::FeatureDocs(feature) => write!(f, "feature-docs:{}", feature),
            Self::StagedDocs => f.write_str("staged-docs"),
        }
    }
}

/// A result tagged with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub kind: CheckKind,
    pub result: CheckResult,
}

impl Finding {
    pub fn new(kind: CheckKind, result: CheckResult) -> Self {
        Self { kind, result }
    }
}

/// Paths of the documents a project is held to, relative to the project root.
#[derive(Debug, Clone)]
pub struct DocLayout<'a> {
    config: &'a DocsConfig,
}

impl<'a> DocLayout<'a> {
    pub fn new(config: &'a DocsConfig) -> Self {
        Self { config }
    }

    fn join(&self, parts: &[&str]) -> String {
        let mut path = self.config.root.trim_end_matches('/').to_string();
        for part in parts {
            path.push('/');
            path.push_str(part);
        }
        path
    }

    pub fn error_catalog(&self) -> String {
        self.join(&[self.config.error_catalog.as_str()])
    }

    /// Accepted spec paths, lowercase form first.
    pub fn spec_candidates(&self, feature: &FeatureId) -> [String; 2] {
        let suffix = &self.config.spec_suffix;
        [
            self.join(&[format!("{}{}", feature, suffix).as_str()]),
            self.join(&[format!("{}{}", feature.capitalized(), suffix).as_str()]),
        ]
    }

    pub fn architecture(&self, feature: &FeatureId) -> String {
        self.join(&[self.config.architecture_dir.as_str(), format!("{}.md", feature).as_str()])
    }

    pub fn user_guide(&self, feature: &FeatureId) -> String {
        self.join(&[self.config.user_guide_dir.as_str(), format!("{}.md", feature).as_str()])
    }

    /// Whether a staged path sits under the documentation root.
    pub fn contains(&self, path: &str) -> bool {
        let root = format!("{}/", self.config.root.trim_end_matches('/'));
        path.starts_with(&root)
    }
}

/// The error catalog must exist, and should be part of the commit.
pub fn check_error_catalog(
    project_root: &Path,
    layout: &DocLayout<'_>,
    staged: &[StagedFile],
) -> CheckResult {
    let catalog = layout.error_catalog();
    if !project_root.join(&catalog).exists() {
        return CheckResult::Blocking(format!(
            "Error catalog is missing. Create {}",
            catalog
        ));
    }
    if !staged.iter().any(|f| f.path == catalog) {
        return CheckResult::Warning(format!(
            "{} is not part of this commit. Check whether new error codes need to be added.",
            catalog
        ));
    }
    CheckResult::Pass
}

/// Spec, architecture note and user guide for one feature. All missing paths
/// are reported together.
pub fn check_feature_docs(
    project_root: &Path,
    layout: &DocLayout<'_>,
    feature: &FeatureId,
) -> CheckResult {
    let exists = |path: &str| project_root.join(path).exists();
    let mut missing = Vec::new();

    let [spec, spec_capitalized] = layout.spec_candidates(feature);
    if !exists(&spec) && !exists(&spec_capitalized) {
        missing.push(format!("  - feature spec: {}", spec));
    }

    let architecture = layout.architecture(feature);
    if !exists(&architecture) {
        missing.push(format!("  - architecture note: {}", architecture));
    }

    let guide = layout.user_guide(feature);
    if !exists(&guide) {
        missing.push(format!("  - user guide: {}", guide));
    }

    if missing.is_empty() {
        CheckResult::Pass
    } else {
        CheckResult::Blocking(format!(
            "Feature '{}' is missing documents:\n{}",
            feature,
            missing.join("\n")
        ))
    }
}

/// A source change with no documentation change at all is worth a warning.
pub fn check_staged_docs(layout: &DocLayout<'_>, staged: &[StagedFile]) -> CheckResult {
    if staged.iter().any(|f| layout.contains(&f.path)) {
        return CheckResult::Pass;
    }
    CheckResult::Warning(format!(
        "No documents under {}/ are part of this commit. \
         If feature code changed, commit the related documents with it.",
        layout.config.root.trim_end_matches('/')
    ))
}

/// All documentation rules, in report order: error catalog, each feature in
/// sorted order, staged documentation.
pub fn check_docs(
    project_root: &Path,
    config: &DocsConfig,
    features: &BTreeSet<FeatureId>,
    staged: &[StagedFile],
) -> Vec<Finding> {
    let layout = DocLayout::new(config);

    std::iter::once(Finding::new(
        CheckKind::ErrorCatalog,
        check_error_catalog(project_root, &layout, staged),
    ))
    .chain(features.iter().map(|feature| {
        Finding::new(
            CheckKind::FeatureDocs(feature.clone()),
            check_feature_docs(project_root, &layout, feature),
        )
    }))
    .chain(std::iter::once(Finding::new(
        CheckKind::StagedDocs,
        check_staged_docs(&layout, staged),
    )))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn feature(name: &str) -> FeatureId {
        FeatureId::new(name).unwrap()
    }

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# doc\n").unwrap();
    }

    #[test]
    fn test_layout_paths() {
        let config = DocsConfig::default();
        let layout = DocLayout::new(&config);
        let f = feature("attendance");

        assert_eq!(layout.error_catalog(), "src/docs/ERROR_MESSAGES.md");
        assert_eq!(
            layout.spec_candidates(&f),
            [
                "src/docs/attendance_spec.md".to_string(),
                "src/docs/Attendance_spec.md".to_string()
            ]
        );
        assert_eq!(layout.architecture(&f), "src/docs/architecture/attendance.md");
        assert_eq!(layout.user_guide(&f), "src/docs/user-guide/attendance.md");
        assert!(layout.contains("src/docs/x.md"));
        assert!(!layout.contains("src/docsy/x.md"));
    }

    #[test]
    fn test_error_catalog_missing_blocks() {
        let dir = TempDir::new().unwrap();
        let config = DocsConfig::default();
        let result = check_error_catalog(dir.path(), &DocLayout::new(&config), &[]);

        match result {
            CheckResult::Blocking(msg) => assert!(msg.contains("src/docs/ERROR_MESSAGES.md")),
            other => panic!("expected blocking, got {other:?}"),
        }
    }

    #[test]
    fn test_error_catalog_unstaged_warns() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/docs/ERROR_MESSAGES.md");
        let config = DocsConfig::default();
        let layout = DocLayout::new(&config);

        assert!(matches!(
            check_error_catalog(dir.path(), &layout, &[]),
            CheckResult::Warning(_)
        ));

        let staged = vec![StagedFile::modified("src/docs/ERROR_MESSAGES.md")];
        assert_eq!(
            check_error_catalog(dir.path(), &layout, &staged),
            CheckResult::Pass
        );
    }

    #[test]
    fn test_feature_docs_capitalized_spec_accepted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/docs/Attendance_spec.md");
        touch(dir.path(), "src/docs/architecture/attendance.md");
        touch(dir.path(), "src/docs/user-guide/attendance.md");
        let config = DocsConfig::default();

        let result = check_feature_docs(dir.path(), &DocLayout::new(&config), &feature("attendance"));
        assert_eq!(result, CheckResult::Pass);
    }

    #[test]
    fn test_feature_docs_lists_only_missing() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/docs/attendance_spec.md");
        touch(dir.path(), "src/docs/architecture/attendance.md");
        let config = DocsConfig::default();

        let CheckResult::Blocking(msg) =
            check_feature_docs(dir.path(), &DocLayout::new(&config), &feature("attendance"))
        else {
            panic!("expected blocking");
        };
        assert!(msg.contains("src/docs/user-guide/attendance.md"));
        assert!(!msg.contains("attendance_spec.md"));
        assert!(!msg.contains("architecture/attendance.md"));
    }

    #[test]
    fn test_feature_docs_all_missing_single_result() {
        let dir = TempDir::new().unwrap();
        let config = DocsConfig::default();

        let CheckResult::Blocking(msg) =
            check_feature_docs(dir.path(), &DocLayout::new(&config), &feature("payroll"))
        else {
            panic!("expected blocking");
        };
        assert_eq!(msg.lines().filter(|l| l.starts_with("  - ")).count(), 3);
    }

    #[test]
    fn test_staged_docs_warning() {
        let config = DocsConfig::default();
        let layout = DocLayout::new(&config);

        let code_only = vec![StagedFile::modified("src/main/java/a/A.java")];
        assert!(matches!(
            check_staged_docs(&layout, &code_only),
            CheckResult::Warning(_)
        ));

        let with_doc = vec![StagedFile::modified("src/docs/user-guide/a.md")];
        assert_eq!(check_staged_docs(&layout, &with_doc), CheckResult::Pass);
    }

    #[test]
    fn test_check_docs_order() {
        let dir = TempDir::new().unwrap();
        let features: BTreeSet<FeatureId> =
            [feature("payroll"), feature("attendance")].into_iter().collect();

        let findings = check_docs(dir.path(), &DocsConfig::default(), &features, &[]);
        let kinds: Vec<String> = findings.iter().map(|f| f.kind.to_string()).collect();
        assert_eq!(
            kinds,
            vec![
                "error-catalog",
                "feature-docs:attendance",
                "feature-docs:payroll",
                "staged-docs"
            ]
        );
    }
}
