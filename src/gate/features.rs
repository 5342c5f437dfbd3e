//! Feature inference from source paths.
//!
//! Heuristic, not a parser. Each matcher looks at one path and may return a
//! feature; the first matcher that answers wins. Missing a feature is
//! acceptable, so nothing here fails.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::FeaturesConfig;

/// Lowercase feature name, e.g. `attendance`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureId(String);

impl FeatureId {
    /// Normalise a raw token. Returns `None` for an empty token.
    pub fn new(raw: &str) -> Option<Self> {
        let token = raw.trim().to_lowercase();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First letter uppercased, as in `Attendance`.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One inference strategy.
pub trait FeatureMatcher {
    fn infer(&self, path: &str) -> Option<FeatureId>;
}

/// `.../attendance/controller/X.java` → `attendance`.
pub struct LayerPackageMatcher {
    layers: Vec<String>,
}

impl LayerPackageMatcher {
    pub fn new(layers: Vec<String>) -> Self {
        Self { layers }
    }
}

impl FeatureMatcher for LayerPackageMatcher {
    fn infer(&self, path: &str) -> Option<FeatureId> {
        let segments: Vec<&str> = path.split('/').collect();
        let idx = segments
            .iter()
            .position(|seg| self.layers.iter().any(|layer| layer == seg))?;
        if idx == 0 {
            return None;
        }
        FeatureId::new(segments[idx - 1])
    }
}

/// `AttendanceController.java` → `attendance`.
///
/// Only the leading capitalised word is taken, so `LeaveRequestService`
/// yields `leave`, not `leaverequest`.
pub struct FileStemMatcher;

fn leading_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Z][a-z]+)").expect("static regex"))
}

impl FeatureMatcher for FileStemMatcher {
    fn infer(&self, path: &str) -> Option<FeatureId> {
        let stem = Path::new(path).file_stem()?.to_str()?;
        let caps = leading_word().captures(stem)?;
        FeatureId::new(&caps[1])
    }
}

/// Ordered matcher chain.
pub struct FeatureInferrer {
    matchers: Vec<Box<dyn FeatureMatcher + Send + Sync>>,
}

impl FeatureInferrer {
    pub fn new(config: &FeaturesConfig) -> Self {
        Self {
            matchers: vec![
                Box::new(LayerPackageMatcher::new(config.layers.clone())),
                Box::new(FileStemMatcher),
            ],
        }
    }

    /// Feature for a single path, if any matcher recognises it.
    pub fn infer_one(&self, path: &str) -> Option<FeatureId> {
        self.matchers.iter().find_map(|m| m.infer(path))
    }

    /// De-duplicated, sorted feature set for a list of paths.
    pub fn infer<'a, I>(&self, paths: I) -> BTreeSet<FeatureId>
    where
        I: IntoIterator<Item = &'a str>,
    {
        paths
            .into_iter()
            .filter_map(|path| self.infer_one(path))
            .collect()
    }
}

impl Default for FeatureInferrer {
    fn default() -> Self {
        Self::new(&FeaturesConfig::default())
    }
}
