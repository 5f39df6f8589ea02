use serde::{Deserialize, Serialize};

/// One accepted expected/observed correspondence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedPair {
    /// Expected label, original casing.
    pub expected: String,
    /// Observed label, original casing.
    pub observed: String,
    /// Similarity confidence, 0-100.
    pub confidence: u8,
}

/// Partition of an expected and an observed label collection.
///
/// Every deduplicated expected label lands in exactly one of
/// `matched`/`missing`; every deduplicated observed label lands in exactly
/// one of `matched`/`unexpected`; `matched` is one-to-one on both sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationResult {
    pub matched: Vec<MatchedPair>,
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
    /// `100 * |matched| / (|matched| + |missing|)`, 0 when the denominator is 0.
    pub match_percentage: f64,
}

impl ReconciliationResult {
    /// One-line human-readable summary of the reconciliation.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.matched.is_empty() {
            parts.push(format!("Found {} matching ingredients", self.matched.len()));
        }
        if !self.missing.is_empty() {
            parts.push(format!("{} ingredients missing", self.missing.len()));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("{} unexpected ingredients", self.unexpected.len()));
        }
        if parts.is_empty() {
            "No clear ingredients detected".to_string()
        } else {
            parts.join(", ")
        }
    }
}
