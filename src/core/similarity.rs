use std::collections::HashSet;
use crate::models::{Lifestyle, Personality};

/// Widest possible gap between two traits on the 1-10 scale
const MAX_TRAIT_DIFFERENCE: f64 = 9.0;

/// Similarity returned when one side has no trait block to compare
pub const NEUTRAL_SIMILARITY: f64 = 0.5;

/// Credit given to mismatched dietary preferences
pub const DIETARY_MISMATCH_SCORE: f64 = 0.3;

/// Jaccard index of two label lists, treated as sets
///
/// Two empty sets agree vacuously and score 1; exactly one empty set scores 0.
pub fn jaccard_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(|s| s.as_ref()).collect();
    let set_b: HashSet<&str> = b.iter().map(|s| s.as_ref()).collect();

    if set_a.is_empty() && set_b.is_empty() {
        return 1.0;
    }
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count() as f64;
    let union = set_a.union(&set_b).count() as f64;

    intersection / union
}

/// Closeness of two equally-sized trait vectors on the 1-10 scale
#[inline]
fn trait_similarity(a: &[f64], b: &[f64]) -> f64 {
    let total_difference: f64 = a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum();
    1.0 - total_difference / (a.len() as f64 * MAX_TRAIT_DIFFERENCE)
}

/// Personality similarity; neutral when either block is missing
pub fn personality_similarity(a: Option<&Personality>, b: Option<&Personality>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => trait_similarity(&a.traits(), &b.traits()),
        _ => NEUTRAL_SIMILARITY,
    }
}

/// Lifestyle similarity; neutral when either block is missing
pub fn lifestyle_similarity(a: Option<&Lifestyle>, b: Option<&Lifestyle>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => trait_similarity(&a.traits(), &b.traits()),
        _ => NEUTRAL_SIMILARITY,
    }
}

#[inline]
pub fn dietary_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        1.0
    } else {
        DIETARY_MISMATCH_SCORE
    }
}
