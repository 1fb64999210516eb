//! Outfit Scorer - Coordinator for compatibility scoring
//!
//! Integrates the four compatibility dimensions behind a trait so the
//! generator can be driven by any scoring strategy, and computes the
//! outfit-level overall and pairwise scores.

use std::collections::BTreeMap;

use crate::config::ScoreWeights;
use crate::metrics::{calculate_compatibility_score, ScoringContext};
use crate::outfit::{pairwise_key, OutfitItems, OutfitScores};
use crate::types::{CompatibilityScore, EnrichedItem};
use crate::weather::WeatherContext;

/// Scores a candidate item against a partial outfit
pub trait CompatibilityScorer: Send + Sync {
    fn score(&self, item: &EnrichedItem, context: &ScoringContext<'_>) -> CompatibilityScore;

    /// Weights used to combine averaged sub-scores
    fn weights(&self) -> &ScoreWeights;
}

/// Default scorer over the four built-in dimensions
#[derive(Debug, Clone, Default)]
pub struct StandardScorer {
    weights: ScoreWeights,
}

impl StandardScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }
}

impl CompatibilityScorer for StandardScorer {
    fn score(&self, item: &EnrichedItem, context: &ScoringContext<'_>) -> CompatibilityScore {
        calculate_compatibility_score(item, context, &self.weights)
    }

    fn weights(&self) -> &ScoreWeights {
        &self.weights
    }
}

/// Overall outfit score
///
/// Each item is scored with every other selected item as its context; the
/// sub-scores are averaged across items and re-weighted into a total.
pub fn score_overall<S: CompatibilityScorer + ?Sized>(
    items: &OutfitItems,
    weather: &WeatherContext,
    scorer: &S,
) -> CompatibilityScore {
    let populated: Vec<&EnrichedItem> = items.iter().map(|(_, item)| item).collect();

    let per_item: Vec<CompatibilityScore> = populated
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let others: Vec<&EnrichedItem> = populated
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, other)| *other)
                .collect();
            scorer.score(item, &ScoringContext::new(weather, &others))
        })
        .collect();

    // Non-empty: core slots are always populated
    CompatibilityScore::average(&per_item, scorer.weights()).unwrap_or_else(|| {
        CompatibilityScore::from_components(0.0, 0.0, 0.0, 0.0, scorer.weights())
    })
}

/// Pairwise scores for every unordered pair of populated slots
///
/// The first slot of each pair is scored with the second as its only context.
pub fn score_pairwise<S: CompatibilityScorer + ?Sized>(
    items: &OutfitItems,
    weather: &WeatherContext,
    scorer: &S,
) -> BTreeMap<String, CompatibilityScore> {
    let populated: Vec<_> = items.iter().collect();
    let mut pairwise = BTreeMap::new();

    for (i, (slot_a, item_a)) in populated.iter().enumerate() {
        for (slot_b, item_b) in &populated[i + 1..] {
            let context_items = [*item_b];
            let score = scorer.score(item_a, &ScoringContext::new(weather, &context_items));
            pairwise.insert(pairwise_key(*slot_a, *slot_b), score);
        }
    }

    pairwise
}

/// Overall and pairwise scores together
pub fn score_outfit<S: CompatibilityScorer + ?Sized>(
    items: &OutfitItems,
    weather: &WeatherContext,
    scorer: &S,
) -> OutfitScores {
    OutfitScores {
        overall: score_overall(items, weather, scorer),
        pairwise: score_pairwise(items, weather, scorer),
    }
}
