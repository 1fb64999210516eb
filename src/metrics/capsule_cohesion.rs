//! DIMENSION 4: CAPSULE COHESION
//!
//! Whether the candidate belongs to the same capsule collections as the rest
//! of the outfit. Untagged pairs are treated as mildly cohesive.

use crate::types::EnrichedItem;

pub const NO_CONTEXT_SCORE: f64 = 0.7;

const SHARED_TAG: f64 = 1.0;
const BOTH_UNTAGGED: f64 = 0.7;
const NO_OVERLAP: f64 = 0.5;

fn pair_cohesion(a: &EnrichedItem, b: &EnrichedItem) -> f64 {
    let tags_a = &a.item.capsule_tags;
    let tags_b = &b.item.capsule_tags;

    if tags_a.is_empty() && tags_b.is_empty() {
        return BOTH_UNTAGGED;
    }
    let shared = tags_a
        .iter()
        .any(|ta| tags_b.iter().any(|tb| ta.trim().eq_ignore_ascii_case(tb.trim())));
    if shared {
        SHARED_TAG
    } else {
        NO_OVERLAP
    }
}

/// Calculate capsule cohesion in [0, 1]
pub fn calculate_capsule_cohesion(item: &EnrichedItem, selected: &[&EnrichedItem]) -> f64 {
    if selected.is_empty() {
        return NO_CONTEXT_SCORE;
    }
    let total: f64 = selected.iter().map(|other| pair_cohesion(item, other)).sum();
    total / selected.len() as f64
}
