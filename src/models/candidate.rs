use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Similarity strategy that produced a match.
///
/// Variant order is the tie-break priority: when two strategies reach the
/// same top score for different catalog entries, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Verbatim equality of normalized forms.
    Exact,
    /// Comparison after alphabetically sorting whitespace tokens.
    TokenSort,
    /// Set semantics over tokens; neutralizes duplicates and subsets.
    TokenSet,
    /// Best equal-length substring alignment of the shorter string.
    Partial,
    /// Length-adaptive blend of the above signals.
    Weighted,
}

/// The accepted correspondence between one raw label and a catalog entry.
///
/// Candidates below the acceptance threshold are never constructed; a
/// rejected label is represented by `None` at the matching call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// The label as supplied upstream, for display.
    pub original: String,
    /// The catalog entry (normalized form) the label matched.
    pub target: String,
    /// Similarity confidence, 0-100.
    pub confidence: u8,
    pub strategy: Strategy,
}

/// Outcome of screening a candidate list against the fixed catalog.
///
/// Unlike reconciliation this is not one-to-one: several candidates may
/// resolve to the same catalog entry. Used by upstream extraction heuristics
/// to filter OCR noise before reconciliation.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenReport {
    pub matched: Vec<MatchCandidate>,
    pub unmatched: Vec<String>,
    /// Share of candidates that matched, 0-100.
    pub match_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_display_snake_case() {
        assert_eq!(Strategy::TokenSort.to_string(), "token_sort");
        assert_eq!(Strategy::Exact.to_string(), "exact");
    }

    #[test]
    fn test_strategy_parses_from_str() {
        assert_eq!("token_set".parse::<Strategy>().unwrap(), Strategy::TokenSet);
        assert!("levenshtein".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_candidate_serializes_strategy_as_string() {
        let candidate = MatchCandidate {
            original: "Extra Spicy Tuna".to_string(),
            target: "spicy tuna".to_string(),
            confidence: 100,
            strategy: Strategy::Exact,
        };
        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json["strategy"], "exact");
        assert_eq!(json["confidence"], 100);
    }
}
