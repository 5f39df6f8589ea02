//! Multi-strategy similarity scoring between a normalized label and the catalog.
//!
//! Five strategies are scored 0-100 against every catalog entry; the
//! per-strategy best entries then compete globally, with ties broken by the
//! fixed priority order of [`Strategy`]. An exact hit short-circuits at 100
//! so an identical string can never be out-scored by fuzzy rounding.

use strsim::normalized_levenshtein;

use crate::catalog::Catalog;
use crate::models::candidate::Strategy;

/// Best (catalog entry, score, strategy) triple for one normalized label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMatch {
    pub target: String,
    pub score: u8,
    pub strategy: Strategy,
}

/// Fuzzy strategies tried after the exact check, in tie-break priority order.
const FUZZY_STRATEGIES: &[Strategy] = &[
    Strategy::TokenSort,
    Strategy::TokenSet,
    Strategy::Partial,
    Strategy::Weighted,
];

/// Score `normalized` against every catalog entry with every strategy and
/// return the winning triple. Returns `None` only for an empty catalog.
pub fn best_match(normalized: &str, catalog: &Catalog) -> Option<BestMatch> {
    if catalog.is_empty() {
        return None;
    }

    if catalog.contains(normalized) {
        return Some(BestMatch {
            target: normalized.to_string(),
            score: 100,
            strategy: Strategy::Exact,
        });
    }

    let mut best: Option<BestMatch> = None;
    for &strategy in FUZZY_STRATEGIES {
        // Per-strategy argmax; strict comparison keeps the earliest entry on ties.
        let mut top_entry = None;
        let mut top_score = 0u8;
        for entry in catalog.entries() {
            let score = score_pair(strategy, normalized, entry);
            if top_entry.is_none() || score > top_score {
                top_entry = Some(entry);
                top_score = score;
            }
        }

        let Some(entry) = top_entry else { continue };
        // Strict comparison again: the higher-priority strategy keeps ties.
        if best.as_ref().is_none_or(|b| top_score > b.score) {
            best = Some(BestMatch {
                target: entry.to_string(),
                score: top_score,
                strategy,
            });
        }
    }
    best
}

/// Score one pair of normalized strings with a single strategy.
pub fn score_pair(strategy: Strategy, a: &str, b: &str) -> u8 {
    match strategy {
        Strategy::Exact => {
            if a == b {
                100
            } else {
                0
            }
        }
        Strategy::TokenSort => token_sort_ratio(a, b),
        Strategy::TokenSet => token_set_ratio(a, b),
        Strategy::Partial => partial_ratio(a, b),
        Strategy::Weighted => weighted_ratio(a, b),
    }
}

fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b) * 100.0
}

fn round_score(score: f64) -> u8 {
    score.round().clamp(0.0, 100.0) as u8
}

fn sort_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Compare after alphabetically sorting tokens; neutralizes word order
/// ("tuna spicy" vs "spicy tuna").
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    round_score(ratio(&sort_tokens(a), &sort_tokens(b)))
}

/// Compare with set semantics over tokens: the sorted intersection is scored
/// against each side's intersection-plus-remainder, and the best of the
/// three comparisons wins. Neutralizes duplicated tokens and subsets
/// ("spicy tuna" vs "tuna spicy extra" scores 100).
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    use std::collections::BTreeSet;

    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let intersection = tokens_a
        .intersection(&tokens_b)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let rest_a = tokens_a
        .difference(&tokens_b)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let rest_b = tokens_b
        .difference(&tokens_a)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    let combined_a = join_tokens(&intersection, &rest_a);
    let combined_b = join_tokens(&intersection, &rest_b);

    let best = ratio(&intersection, &combined_a)
        .max(ratio(&intersection, &combined_b))
        .max(ratio(&combined_a, &combined_b));
    round_score(best)
}

fn join_tokens(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{head} {tail}"),
    }
}

/// Compare the shorter string against every equal-length character window of
/// the longer one and keep the best alignment. Rewards substring containment,
/// which handles truncated OCR output.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let chars_a: Vec<char> = a.chars().collect();
    let chars_b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if chars_a.len() <= chars_b.len() {
        (chars_a, chars_b)
    } else {
        (chars_b, chars_a)
    };

    if shorter.is_empty() {
        return 0;
    }
    if shorter.len() == longer.len() {
        return round_score(ratio(a, b));
    }

    let needle: String = shorter.iter().collect();
    let mut best = 0.0f64;
    for window in longer.windows(shorter.len()) {
        let haystack: String = window.iter().collect();
        best = best.max(ratio(&needle, &haystack));
        if best >= 100.0 {
            break;
        }
    }
    round_score(best)
}

/// Blended score that favors the other signals adaptively by relative
/// string length: plain edit-distance ratio when lengths are comparable,
/// partial-ratio blending when one string dwarfs the other. Token measures
/// are discounted slightly so this strategy only decides when it strictly
/// wins.
pub fn weighted_ratio(a: &str, b: &str) -> u8 {
    const TOKEN_DISCOUNT: f64 = 0.95;

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a == 0 || len_b == 0 {
        return 0;
    }

    let base = ratio(a, b);
    let token_sort = f64::from(token_sort_ratio(a, b)) * TOKEN_DISCOUNT;
    let token_set = f64::from(token_set_ratio(a, b)) * TOKEN_DISCOUNT;

    let length_ratio = len_a.max(len_b) as f64 / len_a.min(len_b) as f64;
    let best = if length_ratio < 1.5 {
        base.max(token_sort).max(token_set)
    } else {
        // One string dwarfs the other: substring alignment carries more
        // signal, scaled down further for extreme skew.
        let partial_scale = if length_ratio > 8.0 { 0.6 } else { 0.9 };
        let partial = f64::from(partial_ratio(a, b)) * partial_scale;
        base.max(partial)
            .max(token_sort * partial_scale)
            .max(token_set * partial_scale)
    };
    round_score(best)
}
