//! Threshold-gated matching of raw labels against a catalog.

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::candidate::{MatchCandidate, ScreenReport};
use crate::normalize::normalize;
use crate::similarity;

/// Default acceptance threshold: the empirical balance between admitting
/// OCR/vision noise and rejecting unrelated ingredients.
pub const DEFAULT_THRESHOLD: u8 = 80;

/// Matches individual labels against an immutable catalog.
///
/// Holds no mutable state; a single instance is safe to share across
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct Matcher {
    catalog: Catalog,
}

impl Matcher {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Find the best catalog correspondence for `label`.
    ///
    /// Returns `None` when the normalized label is empty, the catalog is
    /// empty, or the best score falls strictly below `threshold`.
    pub fn find_match(&self, label: &str, threshold: u8) -> Option<MatchCandidate> {
        let normalized = normalize(label);
        if normalized.is_empty() {
            return None;
        }

        let best = similarity::best_match(&normalized, &self.catalog)?;
        if best.score < threshold {
            debug!(
                label,
                target = %best.target,
                score = best.score,
                threshold,
                "best candidate below threshold"
            );
            return None;
        }

        Some(MatchCandidate {
            original: label.to_string(),
            target: best.target,
            confidence: best.score,
            strategy: best.strategy,
        })
    }

    /// Screen a whole candidate list against the catalog.
    ///
    /// Each label is matched independently — no one-to-one consumption, so
    /// several candidates may resolve to the same catalog entry. Upstream
    /// extraction heuristics use this to drop OCR noise before
    /// reconciliation.
    pub fn screen<S: AsRef<str>>(&self, labels: &[S], threshold: u8) -> ScreenReport {
        let mut matched = Vec::new();
        let mut unmatched = Vec::new();
        for label in labels {
            match self.find_match(label.as_ref(), threshold) {
                Some(candidate) => matched.push(candidate),
                None => unmatched.push(label.as_ref().to_string()),
            }
        }
        let match_rate = if labels.is_empty() {
            0.0
        } else {
            matched.len() as f64 / labels.len() as f64 * 100.0
        };
        ScreenReport {
            matched,
            unmatched,
            match_rate,
        }
    }
}
