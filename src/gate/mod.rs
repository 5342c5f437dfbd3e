//! The pre-commit documentation gate.
//!
//! One run: list staged files, keep product sources, infer features and run
//! the compile check, check documentation, aggregate. Nothing is kept between
//! runs.

pub mod build;
pub mod docs;
pub mod features;
pub mod staged;
pub mod verdict;

use std::path::Path;

use tracing::{debug, info};

use crate::config::GateConfig;

pub use build::{BuildOutcome, BuildTool};
pub use docs::{CheckKind, CheckResult, Finding};
pub use features::{FeatureId, FeatureInferrer};
pub use staged::{StagedFile, StagedStatus};
pub use verdict::Verdict;

/// Run the gate against whatever git reports as staged.
pub async fn run(project_root: &Path, config: &GateConfig) -> Verdict {
    let staged = staged::staged_files(project_root);
    evaluate(project_root, config, &staged).await
}

/// Run the gate against an explicit staged set.
pub async fn evaluate(project_root: &Path, config: &GateConfig, staged: &[StagedFile]) -> Verdict {
    if staged.is_empty() {
        debug!("Nothing staged");
        return Verdict::Allow;
    }

    let sources = staged::product_sources(staged, &config.sources);
    if sources.is_empty() {
        debug!(staged = staged.len(), "No product source staged");
        return Verdict::Allow;
    }

    let features = FeatureInferrer::new(&config.features).infer(sources.iter().copied());
    info!(
        sources = sources.len(),
        features = ?features.iter().map(FeatureId::as_str).collect::<Vec<_>>(),
        "Checking staged change"
    );

    let build = build::verify(project_root, &config.build).await;

    let findings: Vec<Finding> = verdict::build_finding(&build)
        .into_iter()
        .chain(docs::check_docs(project_root, &config.docs, &features, staged))
        .collect();

    let summary = verdict::ChangeSummary {
        source_count: sources.len(),
        features: &features,
        checklist: &config.docs.checklist,
    };
    let verdict = verdict::aggregate(&summary, &findings);
    info!(allow = verdict.is_allow(), "Gate finished");
    verdict
}
