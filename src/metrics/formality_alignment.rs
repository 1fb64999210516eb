//! DIMENSION 2: FORMALITY ALIGNMENT
//!
//! Mean closeness of formality scores between the candidate and every item
//! already in the outfit. A casual piece next to a refined one costs an
//! extra penalty on top of the raw distance.

use crate::types::{EnrichedItem, FormalityBand};

/// Score when there is nothing to align with yet
pub const NO_CONTEXT_SCORE: f64 = 0.8;

const BAND_CLASH_PENALTY: f64 = 0.2;

fn pair_alignment(a: &EnrichedItem, b: &EnrichedItem) -> f64 {
    let distance = (a.formality_or_neutral() as f64 - b.formality_or_neutral() as f64).abs();
    let mut score = 1.0 - distance / 9.0;

    let clash = matches!(
        (a.formality_band, b.formality_band),
        (FormalityBand::Casual, FormalityBand::Refined)
            | (FormalityBand::Refined, FormalityBand::Casual)
    );
    if clash {
        score -= BAND_CLASH_PENALTY;
    }

    score.clamp(0.0, 1.0)
}

/// Calculate formality alignment in [0, 1]
pub fn calculate_formality_alignment(item: &EnrichedItem, selected: &[&EnrichedItem]) -> f64 {
    if selected.is_empty() {
        return NO_CONTEXT_SCORE;
    }
    let total: f64 = selected.iter().map(|other| pair_alignment(item, other)).sum();
    total / selected.len() as f64
}
