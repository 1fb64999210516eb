//! Slot resolution
//!
//! Maps wardrobe category names onto outfit slots and groups enriched items
//! by slot. Categories outside the table are ignored.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{EnrichedItem, WardrobeItem};

/// A named position in an outfit.
///
/// Declaration order is the canonical selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Pants,
    Shirt,
    Shoes,
    Jacket,
    Overshirt,
    Undershirt,
    Belt,
    Watch,
}

/// Canonical slot order for the full selection pass
pub const SLOT_ORDER: [Slot; 8] = [
    Slot::Pants,
    Slot::Shirt,
    Slot::Shoes,
    Slot::Jacket,
    Slot::Overshirt,
    Slot::Undershirt,
    Slot::Belt,
    Slot::Watch,
];

/// Slots every outfit must fill, in core-pass order
pub const CORE_SLOTS: [Slot; 3] = [Slot::Pants, Slot::Shirt, Slot::Shoes];

/// Category names that must be present in a wardrobe
pub const REQUIRED_CATEGORIES: [&str; 3] = ["Shirt", "Pants", "Shoes"];

const CATEGORY_TABLE: [(&str, Slot); 8] = [
    ("Jacket", Slot::Jacket),
    ("Overshirt", Slot::Overshirt),
    ("Shirt", Slot::Shirt),
    ("Undershirt", Slot::Undershirt),
    ("Pants", Slot::Pants),
    ("Shoes", Slot::Shoes),
    ("Belt", Slot::Belt),
    ("Watch", Slot::Watch),
];

impl Slot {
    /// Resolve a wardrobe category name
    pub fn from_category(category: &str) -> Option<Slot> {
        CATEGORY_TABLE
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, slot)| *slot)
    }

    /// Parse a slot key ("shirt") or category name ("Shirt")
    pub fn parse(value: &str) -> Option<Slot> {
        let trimmed = value.trim();
        SLOT_ORDER
            .iter()
            .copied()
            .find(|slot| slot.as_str() == trimmed)
            .or_else(|| Slot::from_category(trimmed))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Pants => "pants",
            Slot::Shirt => "shirt",
            Slot::Shoes => "shoes",
            Slot::Jacket => "jacket",
            Slot::Overshirt => "overshirt",
            Slot::Undershirt => "undershirt",
            Slot::Belt => "belt",
            Slot::Watch => "watch",
        }
    }

    pub fn is_core(&self) -> bool {
        CORE_SLOTS.contains(self)
    }

    /// Outer layers worn over the shirt
    pub fn is_layer(&self) -> bool {
        matches!(self, Slot::Jacket | Slot::Overshirt)
    }

    pub fn is_accessory(&self) -> bool {
        matches!(self, Slot::Belt | Slot::Watch)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slot of an enriched item, if its category maps to one
pub fn slot_of(item: &EnrichedItem) -> Option<Slot> {
    item.category().and_then(Slot::from_category)
}

/// Group items by slot, preserving input order within each slot
pub fn group_items_by_slot(items: &[EnrichedItem]) -> FxHashMap<Slot, Vec<EnrichedItem>> {
    let mut groups: FxHashMap<Slot, Vec<EnrichedItem>> = FxHashMap::default();
    for item in items {
        if let Some(slot) = slot_of(item) {
            groups.entry(slot).or_default().push(item.clone());
        }
    }
    groups
}

/// Required category names absent from the wardrobe, in fixed order
pub fn missing_required_categories(items: &[WardrobeItem]) -> Vec<String> {
    let present: FxHashSet<&str> = items
        .iter()
        .filter_map(|item| item.category.as_deref())
        .collect();

    REQUIRED_CATEGORIES
        .iter()
        .filter(|name| !present.contains(*name))
        .map(|name| name.to_string())
        .collect()
}

/// True iff the wardrobe has at least one Shirt, Pants and Shoes item
pub fn has_required_categories(items: &[WardrobeItem]) -> bool {
    missing_required_categories(items).is_empty()
}
