//! Greedy one-to-one reconciliation of expected vs. observed label lists.

use tracing::debug;

use crate::catalog::Catalog;
use crate::matcher::Matcher;
use crate::models::reconciliation::{MatchedPair, ReconciliationResult};
use crate::normalize::normalize;

/// Partition `expected` (receipt/order) and `observed` (dish) labels into
/// matched pairs, missing labels, and unexpected labels.
///
/// Both lists are deduplicated by normalized form first, keeping the
/// first-seen casing for display. Observed labels are then processed in
/// input order, each matched against a catalog of the *remaining* expected
/// labels; an accepted match consumes its expected label so no label is
/// reused on either side.
///
/// Greedy and order-sensitive by design: when several expected labels would
/// clear the threshold for one observed label, the input order of `observed`
/// decides which gets consumed first. This is not a maximum-weight bipartite
/// assignment; lists are small enough that the simplification holds up.
///
/// Never fails for well-formed input: empty `expected` yields
/// `match_percentage = 0` with no missing labels, empty `observed` yields no
/// matches and no unexpected labels.
pub fn reconcile<E, O>(expected: &[E], observed: &[O], threshold: u8) -> ReconciliationResult
where
    E: AsRef<str>,
    O: AsRef<str>,
{
    let mut pool = dedup_by_normalized(expected);
    let observed = dedup_by_normalized(observed);

    let mut matched = Vec::new();
    let mut unexpected = Vec::new();

    for (_, observed_label) in observed {
        // Catalog over the remaining pool only, so a consumed expected label
        // cannot be claimed twice.
        let matcher = Matcher::new(Catalog::new(pool.iter().map(|(_, original)| original.as_str())));
        match matcher.find_match(&observed_label, threshold) {
            Some(candidate) => {
                // Catalog entries are the normalized pool labels, so the
                // lookup cannot miss.
                match pool.iter().position(|(n, _)| *n == candidate.target) {
                    Some(index) => {
                        let (_, expected_label) = pool.remove(index);
                        debug!(
                            expected = %expected_label,
                            observed = %observed_label,
                            confidence = candidate.confidence,
                            strategy = %candidate.strategy,
                            "accepted match"
                        );
                        matched.push(MatchedPair {
                            expected: expected_label,
                            observed: observed_label,
                            confidence: candidate.confidence,
                        });
                    }
                    None => unexpected.push(observed_label),
                }
            }
            None => unexpected.push(observed_label),
        }
    }

    let missing: Vec<String> = pool.into_iter().map(|(_, original)| original).collect();

    let denominator = matched.len() + missing.len();
    let match_percentage = if denominator == 0 {
        0.0
    } else {
        matched.len() as f64 / denominator as f64 * 100.0
    };

    debug!(
        matched = matched.len(),
        missing = missing.len(),
        unexpected = unexpected.len(),
        match_percentage,
        "reconciliation complete"
    );

    ReconciliationResult {
        matched,
        missing,
        unexpected,
        match_percentage,
    }
}

/// Collapse labels that share a normalized form, keeping first-seen order
/// and casing. Returns (normalized, original) pairs.
fn dedup_by_normalized<S: AsRef<str>>(labels: &[S]) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = Vec::new();
    for label in labels {
        let normalized = normalize(label.as_ref());
        if !out.iter().any(|(n, _)| *n == normalized) {
            out.push((normalized, label.as_ref().to_string()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::DEFAULT_THRESHOLD;

    #[test]
    fn test_consumed_expected_label_is_unavailable() {
        // Two observed variants of avocado; only one expected entry to claim.
        let result = reconcile(
            &["Avocado", "Salmon"],
            &["avocado", "avocados"],
            DEFAULT_THRESHOLD,
        );
        assert_eq!(result.matched.len(), 1);
        assert_eq!(result.matched[0].expected, "Avocado");
        assert_eq!(result.matched[0].observed, "avocado");
        assert_eq!(result.unexpected, vec!["avocados"]);
        assert_eq!(result.missing, vec!["Salmon"]);
    }

    #[test]
    fn test_duplicate_labels_collapse_before_matching() {
        let result = reconcile(
            &["Salmon", "salmon", "SALMON!"],
            &["salmon", "Salmon"],
            DEFAULT_THRESHOLD,
        );
        assert_eq!(result.matched.len(), 1);
        assert!(result.missing.is_empty());
        assert!(result.unexpected.is_empty());
        assert_eq!(result.match_percentage, 100.0);
    }

    #[test]
    fn test_observed_order_decides_greedy_consumption() {
        // Both observed labels would accept "Tuna"; first in input order wins.
        let forward = reconcile(&["Tuna"], &["tuna", "tunaa"], DEFAULT_THRESHOLD);
        assert_eq!(forward.matched[0].observed, "tuna");
        assert_eq!(forward.unexpected, vec!["tunaa"]);

        let reversed = reconcile(&["Tuna"], &["tunaa", "tuna"], DEFAULT_THRESHOLD);
        assert_eq!(reversed.matched[0].observed, "tunaa");
        assert_eq!(reversed.unexpected, vec!["tuna"]);
    }

    #[test]
    fn test_degenerate_observed_label_is_unexpected() {
        let result = reconcile(&["Salmon"], &["!!!"], DEFAULT_THRESHOLD);
        assert!(result.matched.is_empty());
        assert_eq!(result.unexpected, vec!["!!!"]);
        assert_eq!(result.missing, vec!["Salmon"]);
    }

    #[test]
    fn test_both_empty() {
        let result = reconcile(&Vec::<&str>::new(), &Vec::<&str>::new(), DEFAULT_THRESHOLD);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert!(result.unexpected.is_empty());
        assert_eq!(result.match_percentage, 0.0);
    }
}
