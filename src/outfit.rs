//! Generated outfit
//!
//! A fresh, immutable value produced by every generate or swap call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::OutfitError;
use crate::slots::{Slot, SLOT_ORDER};
use crate::types::{CompatibilityScore, EnrichedItem};
use crate::weather::WeatherContext;

/// Slot to item mapping. Shirt, pants and shoes are always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitItems {
    pub pants: EnrichedItem,
    pub shirt: EnrichedItem,
    pub shoes: EnrichedItem,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jacket: Option<EnrichedItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overshirt: Option<EnrichedItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undershirt: Option<EnrichedItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub belt: Option<EnrichedItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch: Option<EnrichedItem>,
}

impl OutfitItems {
    /// Build from a slot selection. Fails if a core slot is unfilled.
    pub fn from_selection(selection: Vec<(Slot, EnrichedItem)>) -> Result<Self, OutfitError> {
        let mut by_slot: BTreeMap<Slot, EnrichedItem> = selection.into_iter().collect();
        let missing = |slot: Slot| OutfitError::IncompleteOutfit {
            slot: slot.to_string(),
        };
        let mut take = |slot: Slot| by_slot.remove(&slot);

        let pants = take(Slot::Pants).ok_or_else(|| missing(Slot::Pants))?;
        let shirt = take(Slot::Shirt).ok_or_else(|| missing(Slot::Shirt))?;
        let shoes = take(Slot::Shoes).ok_or_else(|| missing(Slot::Shoes))?;

        Ok(Self {
            pants,
            shirt,
            shoes,
            jacket: take(Slot::Jacket),
            overshirt: take(Slot::Overshirt),
            undershirt: take(Slot::Undershirt),
            belt: take(Slot::Belt),
            watch: take(Slot::Watch),
        })
    }

    pub fn get(&self, slot: Slot) -> Option<&EnrichedItem> {
        match slot {
            Slot::Pants => Some(&self.pants),
            Slot::Shirt => Some(&self.shirt),
            Slot::Shoes => Some(&self.shoes),
            Slot::Jacket => self.jacket.as_ref(),
            Slot::Overshirt => self.overshirt.as_ref(),
            Slot::Undershirt => self.undershirt.as_ref(),
            Slot::Belt => self.belt.as_ref(),
            Slot::Watch => self.watch.as_ref(),
        }
    }

    pub fn contains(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    /// Populated slots in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &EnrichedItem)> + '_ {
        SLOT_ORDER
            .iter()
            .filter_map(move |slot| self.get(*slot).map(|item| (*slot, item)))
    }

    pub fn slots(&self) -> Vec<Slot> {
        self.iter().map(|(slot, _)| slot).collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false: the three core slots are mandatory
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Copy with one slot replaced
    pub fn with_replaced(&self, slot: Slot, item: EnrichedItem) -> Self {
        let mut next = self.clone();
        match slot {
            Slot::Pants => next.pants = item,
            Slot::Shirt => next.shirt = item,
            Slot::Shoes => next.shoes = item,
            Slot::Jacket => next.jacket = Some(item),
            Slot::Overshirt => next.overshirt = Some(item),
            Slot::Undershirt => next.undershirt = Some(item),
            Slot::Belt => next.belt = Some(item),
            Slot::Watch => next.watch = Some(item),
        }
        next
    }

    pub fn item_ids(&self) -> Vec<String> {
        self.iter().map(|(_, item)| item.id().to_string()).collect()
    }
}

/// Key for a pair of slots, e.g. "pants-shirt"
pub fn pairwise_key(a: Slot, b: Slot) -> String {
    format!("{}-{}", a, b)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitScores {
    pub overall: CompatibilityScore,
    /// One entry per unordered pair of populated slots
    pub pairwise: BTreeMap<String, CompatibilityScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedOutfit {
    pub items: OutfitItems,
    pub item_ids: Vec<String>,
    pub scores: OutfitScores,
    /// True when the slot had more than one candidate
    pub swappable: BTreeMap<Slot, bool>,
    pub weather_context: WeatherContext,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedOutfit {
    /// Equality ignoring the generation timestamp
    pub fn same_as(&self, other: &GeneratedOutfit) -> bool {
        self.items == other.items
            && self.item_ids == other.item_ids
            && self.scores == other.scores
            && self.swappable == other.swappable
            && self.weather_context == other.weather_context
    }
}
