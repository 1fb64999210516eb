//! Compatibility dimensions
//!
//! Each dimension is implemented in its own module and scores one candidate
//! against the items already chosen for the outfit.

pub mod weather_fit;
pub mod formality_alignment;
pub mod color_harmony;
pub mod capsule_cohesion;

// Re-export dimension functions
pub use weather_fit::calculate_weather_fit;
pub use formality_alignment::calculate_formality_alignment;
pub use color_harmony::calculate_color_harmony;
pub use capsule_cohesion::calculate_capsule_cohesion;

use crate::config::ScoreWeights;
use crate::types::{CompatibilityScore, EnrichedItem};
use crate::weather::WeatherContext;

/// What a candidate is scored against
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub weather: &'a WeatherContext,
    pub selected_items: &'a [&'a EnrichedItem],
}

impl<'a> ScoringContext<'a> {
    pub fn new(weather: &'a WeatherContext, selected_items: &'a [&'a EnrichedItem]) -> Self {
        Self { weather, selected_items }
    }
}

/// Score one item on all four dimensions
pub fn calculate_compatibility_score(
    item: &EnrichedItem,
    context: &ScoringContext<'_>,
    weights: &ScoreWeights,
) -> CompatibilityScore {
    let weather_fit = calculate_weather_fit(item, context.weather);
    let formality_alignment = calculate_formality_alignment(item, context.selected_items);
    let color_harmony = calculate_color_harmony(item, context.selected_items);
    let capsule_cohesion = calculate_capsule_cohesion(item, context.selected_items);

    CompatibilityScore::from_components(
        weather_fit,
        formality_alignment,
        color_harmony,
        capsule_cohesion,
        weights,
    )
}
