//! Swap Engine
//!
//! Replaces the item in one slot of an existing outfit, keeping every other
//! slot fixed, and rescores the result. The input outfit is never mutated.

use crate::enrichment::enrich_items;
use crate::error::OutfitError;
use crate::generator::OutfitGenerator;
use crate::outfit::GeneratedOutfit;
use crate::scorer::CompatibilityScorer;
use crate::selector::{SelectionContext, SelectionOptions};
use crate::slots::{group_items_by_slot, Slot};
use crate::types::{EnrichedItem, WardrobeItem};
use crate::utils::VariationHasher;
use crate::weather::WeatherContext;

/// Inputs for one swap call
#[derive(Debug, Clone, Copy)]
pub struct SwapOptions<'a> {
    pub current_outfit: &'a GeneratedOutfit,
    /// Slot key ("shoes") or category name ("Shoes")
    pub category: &'a str,
    pub wardrobe_items: &'a [WardrobeItem],
    pub weather_context: &'a WeatherContext,
}

impl<S: CompatibilityScorer, H: VariationHasher> OutfitGenerator<S, H> {
    /// Swap the item in one slot for the best alternative
    pub fn swap_item(&self, options: &SwapOptions<'_>) -> Result<GeneratedOutfit, OutfitError> {
        let current = options.current_outfit;
        let weather = options.weather_context;

        let slot = Slot::parse(options.category)
            .filter(|slot| current.items.contains(*slot))
            .ok_or_else(|| OutfitError::CategoryNotInOutfit {
                category: options.category.to_string(),
            })?;
        weather.validate()?;

        let active: Vec<WardrobeItem> = options
            .wardrobe_items
            .iter()
            .filter(|item| item.active)
            .cloned()
            .collect();
        let candidates = group_items_by_slot(&enrich_items(&active));

        let no_alternatives = || OutfitError::NoAlternatives {
            category: slot.to_string(),
        };
        let slot_candidates = candidates
            .get(&slot)
            .filter(|items| items.len() > 1)
            .ok_or_else(no_alternatives)?;

        let fixed: Vec<(Slot, EnrichedItem)> = current
            .items
            .iter()
            .filter(|(s, _)| *s != slot)
            .map(|(s, item)| (s, item.clone()))
            .collect();
        let current_id = current
            .items
            .get(slot)
            .map(|item| item.id().to_string())
            .ok_or_else(no_alternatives)?;
        let exclude_items = [current_id];

        let context = SelectionContext {
            weather,
            selected_items: &fixed,
            exclude_items: &exclude_items,
            slot,
        };
        let selection_options = SelectionOptions {
            prefer_shorts: slot == Slot::Pants && weather.is_hot,
            variation_seed: None,
            exploration_level: 0.0,
        };
        let replacement = self
            .selector()
            .select_best_item(slot_candidates, &context, &selection_options)
            .ok_or_else(no_alternatives)?
            .clone();

        if replacement.id() == exclude_items[0] {
            tracing::debug!("{}: only the current item fits, keeping {}", slot, replacement.id());
        }

        let items = current.items.with_replaced(slot, replacement);
        let outfit = self.assemble(items, &candidates, weather);
        tracing::info!(
            "Swapped {}: {} -> {} (overall {:.3} -> {:.3})",
            slot,
            exclude_items[0],
            outfit.items.get(slot).map_or("", |item| item.id()),
            current.scores.overall.total,
            outfit.scores.overall.total
        );
        Ok(outfit)
    }
}
