//! Category Inclusion Policy
//!
//! Decides which optional slots take part in an outfit. Runs after the core
//! pass because belt inclusion depends on the tentative pants and shoes.

use rustc_hash::FxHashSet;

use crate::slots::{Slot, SLOT_ORDER};
use crate::types::EnrichedItem;
use crate::weather::WeatherContext;

/// Pants formality at which a belt is worn
pub const BELT_PANTS_FORMALITY: u8 = 5;
/// Shoe formality at which a belt is worn
pub const BELT_SHOES_FORMALITY: u8 = 6;
/// Target weight from which an outer layer is added
pub const LAYER_TARGET_WEIGHT: u8 = 2;

/// Tentative core picks from the first pass
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreSelections<'a> {
    pub pants: Option<&'a EnrichedItem>,
    pub shirt: Option<&'a EnrichedItem>,
    pub shoes: Option<&'a EnrichedItem>,
}

/// Slots to fill, in canonical order
///
/// Rules, in priority order:
/// 1. Core slots whenever available
/// 2. Target weight >= 2: jacket if available, otherwise overshirt
/// 3. Undershirt unless hot
/// 4. Belt when pants formality >= 5 or shoes formality >= 6
/// 5. Watch whenever available
pub fn determine_included_categories(
    weather: &WeatherContext,
    available: &FxHashSet<Slot>,
    core: &CoreSelections<'_>,
) -> Vec<Slot> {
    let mut included: FxHashSet<Slot> = FxHashSet::default();
    let has = |slot: Slot| available.contains(&slot);

    for slot in [Slot::Shirt, Slot::Pants, Slot::Shoes] {
        if has(slot) {
            included.insert(slot);
        }
    }

    if weather.target_weight >= LAYER_TARGET_WEIGHT {
        if has(Slot::Jacket) {
            included.insert(Slot::Jacket);
        } else if has(Slot::Overshirt) {
            included.insert(Slot::Overshirt);
        }
    }

    if !weather.is_hot && has(Slot::Undershirt) {
        included.insert(Slot::Undershirt);
    }

    if has(Slot::Belt) {
        let pants_formality = core.pants.map_or(0, |p| p.formality_or_zero());
        let shoes_formality = core.shoes.map_or(0, |s| s.formality_or_zero());
        if pants_formality >= BELT_PANTS_FORMALITY || shoes_formality >= BELT_SHOES_FORMALITY {
            included.insert(Slot::Belt);
        }
    }

    if has(Slot::Watch) {
        included.insert(Slot::Watch);
    }

    SLOT_ORDER
        .iter()
        .copied()
        .filter(|slot| included.contains(slot))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::enrich_item;
    use crate::types::WardrobeItem;
    use crate::weather::WeatherBand;

    fn all_slots() -> FxHashSet<Slot> {
        SLOT_ORDER.iter().copied().collect()
    }

    /// Included slots when no core item has been picked yet
    fn without_core(weather: &WeatherContext, available: &FxHashSet<Slot>) -> Vec<Slot> {
        determine_included_categories(weather, available, &CoreSelections::default())
    }

    fn with_formality(category: &str, formality: Option<u8>) -> EnrichedItem {
        let mut item = WardrobeItem::new("x", category, "x");
        item.formality_score = formality;
        enrich_item(&item)
    }

    #[test]
    fn test_jacket_preferred_over_overshirt() {
        let weather = WeatherContext::for_band(WeatherBand::Mild);
        let included = without_core(&weather, &all_slots());
        assert!(included.contains(&Slot::Jacket));
        assert!(!included.contains(&Slot::Overshirt));

        let mut no_jacket = all_slots();
        no_jacket.remove(&Slot::Jacket);
        let included = without_core(&weather, &no_jacket);
        assert!(included.contains(&Slot::Overshirt));
    }

    #[test]
    fn test_no_layer_when_warm() {
        let weather = WeatherContext::for_band(WeatherBand::Warm);
        let included = without_core(&weather, &all_slots());
        assert!(!included.contains(&Slot::Jacket));
        assert!(!included.contains(&Slot::Overshirt));
        assert!(included.contains(&Slot::Undershirt));
    }

    #[test]
    fn test_undershirt_dropped_when_hot() {
        let weather = WeatherContext::for_band(WeatherBand::Hot);
        let included = without_core(&weather, &all_slots());
        assert!(!included.contains(&Slot::Undershirt));
    }

    #[test]
    fn test_belt_thresholds() {
        let weather = WeatherContext::for_band(WeatherBand::Warm);
        let casual_pants = with_formality("Pants", Some(4));
        let dress_pants = with_formality("Pants", Some(5));
        let sneakers = with_formality("Shoes", Some(5));
        let oxfords = with_formality("Shoes", Some(6));
        let unset = with_formality("Pants", None);

        let belt_for = |pants: &EnrichedItem, shoes: &EnrichedItem| {
            let core = CoreSelections {
                pants: Some(pants),
                shirt: None,
                shoes: Some(shoes),
            };
            determine_included_categories(&weather, &all_slots(), &core).contains(&Slot::Belt)
        };

        assert!(!belt_for(&casual_pants, &sneakers));
        assert!(belt_for(&dress_pants, &sneakers));
        assert!(belt_for(&casual_pants, &oxfords));
        assert!(!belt_for(&unset, &sneakers));
    }

    #[test]
    fn test_watch_unconditional_and_order_canonical() {
        let weather = WeatherContext::for_band(WeatherBand::Hot);
        let available: FxHashSet<Slot> =
            [Slot::Watch, Slot::Shoes, Slot::Shirt, Slot::Pants].into_iter().collect();
        let included = without_core(&weather, &available);
        assert_eq!(included, vec![Slot::Pants, Slot::Shirt, Slot::Shoes, Slot::Watch]);
    }
}
