//! DIMENSION 3: COLOUR HARMONY
//!
//! Pairwise palette compatibility, averaged over the current selection.
//! Neutrals go with everything; warm against cool is the weakest pairing.

use crate::types::EnrichedItem;
use crate::utils::PaletteGroup;

pub const NO_CONTEXT_SCORE: f64 = 0.8;

const NEUTRAL_PAIR: f64 = 1.0;
const UNKNOWN_PAIR: f64 = 0.7;
const IDENTICAL_PAIR: f64 = 0.75;
const SAME_GROUP_PAIR: f64 = 0.8;
const CLASH_PAIR: f64 = 0.5;

/// Harmony of two colours
pub fn pair_harmony(a: Option<&str>, b: Option<&str>) -> f64 {
    let group_a = PaletteGroup::from_color(a);
    let group_b = PaletteGroup::from_color(b);

    if group_a == PaletteGroup::Neutral || group_b == PaletteGroup::Neutral {
        return NEUTRAL_PAIR;
    }
    if group_a == PaletteGroup::Unknown || group_b == PaletteGroup::Unknown {
        return UNKNOWN_PAIR;
    }

    let same_colour = match (a, b) {
        (Some(a), Some(b)) => a.trim().eq_ignore_ascii_case(b.trim()),
        _ => false,
    };
    if same_colour {
        IDENTICAL_PAIR
    } else if group_a == group_b {
        SAME_GROUP_PAIR
    } else {
        CLASH_PAIR
    }
}

/// Calculate colour harmony in [0, 1]
pub fn calculate_color_harmony(item: &EnrichedItem, selected: &[&EnrichedItem]) -> f64 {
    if selected.is_empty() {
        return NO_CONTEXT_SCORE;
    }
    let total: f64 = selected
        .iter()
        .map(|other| pair_harmony(item.color(), other.color()))
        .sum();
    total / selected.len() as f64
}
