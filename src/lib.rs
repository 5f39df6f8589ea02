//! Ingredient Reconciliation Engine
//!
//! This library compares two noisy ingredient-name lists — one parsed from
//! receipt text or an order record, the other produced by visual inspection
//! of a prepared dish — and partitions them into matched, missing, and
//! unexpected ingredients. Both upstream sources are unreliable (OCR
//! misreads, vision-model hallucination, inconsistent naming), so matching
//! is approximate: multiple scoring strategies per candidate pair, explicit
//! confidence in 0-100, and deterministic tie-breaking.
//!
//! Image acquisition, OCR, and vision-model calls are external collaborators;
//! this crate only ever sees their output as collections of strings.

pub mod catalog;
pub mod matcher;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod reconcile;
pub mod similarity;
