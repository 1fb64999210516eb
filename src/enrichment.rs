//! Item Enrichment
//!
//! Derives the formality band and weather weight for each wardrobe item.
//! Pure and allocation-light; runs once per generation call.

use crate::slots::Slot;
use crate::types::{EnrichedItem, FormalityBand, WardrobeItem};
use crate::utils::lookup_tables::{
    contains_any, has_word_in, HEAVY_MATERIALS, HEAVY_NAME_WORDS, LIGHT_MATERIALS, LIGHT_NAME_WORDS,
};

/// Base warmth contributed by each slot before material adjustments
fn base_weight(slot: Option<Slot>) -> i8 {
    match slot {
        Some(Slot::Jacket) => 3,
        Some(Slot::Overshirt) => 2,
        Some(Slot::Shirt) | Some(Slot::Pants) | Some(Slot::Shoes) => 1,
        Some(Slot::Undershirt) | Some(Slot::Belt) | Some(Slot::Watch) => 0,
        None => 1,
    }
}

/// Infer a 0-3 warmth weight from category, material and name
pub fn infer_weather_weight(item: &WardrobeItem) -> u8 {
    let slot = item.category.as_deref().and_then(Slot::from_category);

    // Accessories carry no warmth regardless of material
    if slot.is_some_and(|s| s.is_accessory()) {
        return 0;
    }

    let material = item.material.as_deref().unwrap_or("").to_lowercase();
    let name = item.name.to_lowercase();

    let heavy = contains_any(&material, HEAVY_MATERIALS)
        || has_word_in(&name, HEAVY_NAME_WORDS)
        || (slot == Some(Slot::Jacket) && material.contains("leather"));
    let light = contains_any(&material, LIGHT_MATERIALS) || has_word_in(&name, LIGHT_NAME_WORDS);

    let mut weight = base_weight(slot);
    if heavy {
        weight += 1;
    }
    if light {
        weight -= 1;
    }

    weight.clamp(0, 3) as u8
}

/// Enrich a single item
pub fn enrich_item(item: &WardrobeItem) -> EnrichedItem {
    EnrichedItem {
        formality_band: FormalityBand::from_score(item.formality_score),
        weather_weight: infer_weather_weight(item),
        item: item.clone(),
    }
}

/// Enrich a wardrobe snapshot, preserving order
pub fn enrich_items(items: &[WardrobeItem]) -> Vec<EnrichedItem> {
    items.iter().map(enrich_item).collect()
}
