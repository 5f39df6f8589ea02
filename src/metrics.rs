//! Offline evaluation metrics against hand-labeled ground truth.
//!
//! Exact set intersection only — deliberately stricter than the live
//! matching path, so evaluation numbers are not inflated by the same fuzzy
//! logic they are meant to judge.

use std::collections::BTreeSet;

use serde::Serialize;

/// Precision/recall/F1 of a detected label set against ground truth.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationMetrics {
    /// `|TP| / |detected|`, 0 when nothing was detected.
    pub precision: f64,
    /// `|TP| / |expected|`, 0 when nothing was expected.
    pub recall: f64,
    /// `2PR / (P + R)`, 0 when P + R is 0.
    pub f1: f64,
    /// Labels correctly detected, sorted.
    pub true_positives: Vec<String>,
    /// Labels detected but not expected, sorted.
    pub false_positives: Vec<String>,
    /// Labels expected but not detected, sorted.
    pub false_negatives: Vec<String>,
}

/// Score `detected` against the `expected` ground-truth labels.
///
/// Both inputs are treated as sets; duplicates carry no weight.
pub fn evaluate<E, D>(expected: &[E], detected: &[D]) -> EvaluationMetrics
where
    E: AsRef<str>,
    D: AsRef<str>,
{
    let expected: BTreeSet<&str> = expected.iter().map(AsRef::as_ref).collect();
    let detected: BTreeSet<&str> = detected.iter().map(AsRef::as_ref).collect();

    let true_positives: Vec<String> = expected
        .intersection(&detected)
        .map(|s| s.to_string())
        .collect();
    let false_positives: Vec<String> = detected
        .difference(&expected)
        .map(|s| s.to_string())
        .collect();
    let false_negatives: Vec<String> = expected
        .difference(&detected)
        .map(|s| s.to_string())
        .collect();

    let precision = if detected.is_empty() {
        0.0
    } else {
        true_positives.len() as f64 / detected.len() as f64
    };
    let recall = if expected.is_empty() {
        0.0
    } else {
        true_positives.len() as f64 / expected.len() as f64
    };
    let f1 = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };

    EvaluationMetrics {
        precision,
        recall,
        f1,
        true_positives,
        false_positives,
        false_negatives,
    }
}
