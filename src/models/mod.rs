pub mod candidate;
pub mod reconciliation;
