//! Verdict aggregation and report formatting.

use std::collections::BTreeSet;

use crate::gate::build::BuildOutcome;
use crate::gate::docs::{CheckKind, CheckResult, Finding};
use crate::gate::features::FeatureId;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Final decision for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    /// Carries the full report.
    Deny(String),
}

impl Verdict {
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Everything the report header needs to know about the change set.
#[derive(Debug, Clone)]
pub struct ChangeSummary<'a> {
    pub source_count: usize,
    pub features: &'a BTreeSet<FeatureId>,
    pub checklist: &'a str,
}

/// Turn the build outcome into a finding, if it has anything to say.
pub fn build_finding(outcome: &BuildOutcome) -> Option<Finding> {
    match outcome {
        BuildOutcome::Failed(message) => Some(Finding::new(
            CheckKind::Build,
            CheckResult::Blocking(message.clone()),
        )),
        BuildOutcome::Skipped | BuildOutcome::Success => None,
    }
}

/// Deny iff any finding blocks. Warnings only appear in a denial report.
pub fn aggregate(summary: &ChangeSummary<'_>, findings: &[Finding]) -> Verdict {
    if !findings.iter().any(|f| f.result.is_blocking()) {
        return Verdict::Allow;
    }
    Verdict::Deny(render_report(summary, findings))
}

fn render_entry(finding: &Finding) -> Option<String> {
    match &finding.result {
        CheckResult::Pass => None,
        CheckResult::Blocking(message) => Some(format!("❌ [{}] {}", finding.kind, message)),
        CheckResult::Warning(message) => Some(format!("⚠️ [{}] {}", finding.kind, message)),
    }
}

/// Header, every non-passing finding in order, footer.
pub fn render_report(summary: &ChangeSummary<'_>, findings: &[Finding]) -> String {
    let features = if summary.features.is_empty() {
        "none detected".to_string()
    } else {
        summary
            .features
            .iter()
            .map(FeatureId::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };

    let header = format!(
        "🚫 Pre-commit documentation checklist incomplete\n{RULE}\n\
         Changed source files: {}\n\
         Detected features: {}\n{RULE}",
        summary.source_count, features
    );

    let body = findings
        .iter()
        .filter_map(render_entry)
        .collect::<Vec<_>>()
        .join("\n\n");

    let footer = format!(
        "{RULE}\n📋 Write or update the documents above, then commit again.\n   See: {}",
        summary.checklist
    );

    format!("{}\n\n{}\n\n{}", header, body, footer)
}
