//! Fuzzy word matching via edit distance.
//!
//! This module provides Levenshtein distance calculation and closest-word
//! lookup over a list of candidates, the building blocks of a
//! "did you mean?" feature.

pub mod closest;
pub mod levenshtein;

// Re-export commonly used types
pub use closest::*;
pub use levenshtein::*;
