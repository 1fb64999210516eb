//! Outfit Generator - Main coordinator for outfit assembly
//!
//! Two-pass assembly:
//!   1. Core pass picks pants, shirt and shoes in that order
//!   2. The inclusion policy decides the optional slots from the core picks
//!   3. Full pass re-selects every included slot in canonical order
//!
//! Includes a parallel (Rayon) variation generator.

use chrono::Utc;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::GeneratorConfig;
use crate::enrichment::enrich_items;
use crate::error::OutfitError;
use crate::inclusion::{determine_included_categories, CoreSelections};
use crate::outfit::{GeneratedOutfit, OutfitItems};
use crate::scorer::{score_outfit, CompatibilityScorer, StandardScorer};
use crate::selector::{ItemSelector, SelectionContext, SelectionOptions};
use crate::slots::{group_items_by_slot, missing_required_categories, Slot, CORE_SLOTS};
use crate::types::{EnrichedItem, WardrobeItem};
use crate::utils::{Fnv1aHasher, VariationHasher};
use crate::weather::WeatherContext;

/// Seed prefix for variations when the caller gives none
pub const DEFAULT_VARIATION_SEED: &str = "variation";

/// Enriched candidates keyed by slot
pub type SlotCandidates = FxHashMap<Slot, Vec<EnrichedItem>>;

/// Inputs for one generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    pub wardrobe_items: Vec<WardrobeItem>,
    pub weather_context: WeatherContext,
    /// Recently worn item ids to avoid
    #[serde(default)]
    pub exclude_items: Vec<String>,
    #[serde(default)]
    pub variation_seed: Option<String>,
    /// 0 = always the best match, 1 = widest variety among strict matches
    #[serde(default)]
    pub exploration_level: f64,
}

impl GenerateOptions {
    pub fn new(wardrobe_items: Vec<WardrobeItem>, weather_context: WeatherContext) -> Self {
        Self {
            wardrobe_items,
            weather_context,
            exclude_items: Vec::new(),
            variation_seed: None,
            exploration_level: 0.0,
        }
    }

    pub fn with_exclusions<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_items = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>, exploration_level: f64) -> Self {
        self.variation_seed = Some(seed.into());
        self.exploration_level = exploration_level;
        self
    }
}

/// Main outfit generator
///
/// Stateless between calls: every call works on its own copies of the
/// inputs, so one generator can serve many threads.
pub struct OutfitGenerator<S = StandardScorer, H = Fnv1aHasher> {
    config: GeneratorConfig,
    scorer: S,
    hasher: H,
}

impl OutfitGenerator {
    /// Generator with default configuration
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        let scorer = StandardScorer::new(config.weights);
        Self::with_strategies(config, scorer, Fnv1aHasher)
    }
}

impl Default for OutfitGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CompatibilityScorer, H: VariationHasher> OutfitGenerator<S, H> {
    /// Generator with a custom scoring and variation strategy
    pub fn with_strategies(config: GeneratorConfig, scorer: S, hasher: H) -> Self {
        Self { config, scorer, hasher }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub(crate) fn selector(&self) -> ItemSelector<'_, S, H> {
        ItemSelector::new(&self.scorer, &self.hasher, &self.config.selection)
    }

    /// Generate one outfit
    ///
    /// Fails when the active wardrobe lacks a shirt, pants or shoes, when the
    /// weather context is malformed, or when a core slot ends up unfilled.
    pub fn generate_outfit(
        &self,
        options: &GenerateOptions,
    ) -> Result<GeneratedOutfit, OutfitError> {
        self.generate_with_seed(options, options.variation_seed.as_deref())
    }

    /// Generate again, typically with new exclusions or a new seed
    pub fn regenerate_outfit(
        &self,
        options: &GenerateOptions,
    ) -> Result<GeneratedOutfit, OutfitError> {
        self.generate_outfit(options)
    }

    /// Generate `count` outfits in parallel with seeds "{base}:{i}"
    ///
    /// The base is the options' seed, or "variation". With an exploration
    /// level of 0 every variation is the same outfit.
    pub fn generate_variations(
        &self,
        options: &GenerateOptions,
        count: usize,
    ) -> Result<Vec<GeneratedOutfit>, OutfitError> {
        let base = options.variation_seed.as_deref().unwrap_or(DEFAULT_VARIATION_SEED);

        (0..count)
            .into_par_iter()
            .map(|i| {
                let seed = format!("{}:{}", base, i);
                self.generate_with_seed(options, Some(&seed))
            })
            .collect()
    }

    fn generate_with_seed(
        &self,
        options: &GenerateOptions,
        seed: Option<&str>,
    ) -> Result<GeneratedOutfit, OutfitError> {
        let weather = &options.weather_context;

        // STEP 1: precondition on the active wardrobe
        let active: Vec<WardrobeItem> = options
            .wardrobe_items
            .iter()
            .filter(|item| item.active)
            .cloned()
            .collect();
        let missing = missing_required_categories(&active);
        if !missing.is_empty() {
            return Err(OutfitError::MissingRequiredCategories { missing });
        }
        weather.validate()?;

        // STEP 2: enrich and group
        let candidates = group_items_by_slot(&enrich_items(&active));
        let available: FxHashSet<Slot> = candidates.keys().copied().collect();

        let selection_options = SelectionOptions {
            prefer_shorts: false,
            variation_seed: seed,
            exploration_level: options.exploration_level,
        };

        // STEP 3: core pass
        let core = self.select_slots(
            &CORE_SLOTS,
            &candidates,
            weather,
            &options.exclude_items,
            &selection_options,
        );
        let core_selections = CoreSelections {
            pants: selected_in(&core, Slot::Pants),
            shirt: selected_in(&core, Slot::Shirt),
            shoes: selected_in(&core, Slot::Shoes),
        };

        // STEP 4: inclusion policy
        let included = determine_included_categories(weather, &available, &core_selections);
        tracing::debug!(
            "Included slots: {}",
            included.iter().map(Slot::as_str).collect::<Vec<_>>().join(", ")
        );

        // STEP 5: full pass
        let selected = self.select_slots(
            &included,
            &candidates,
            weather,
            &options.exclude_items,
            &selection_options,
        );
        let items = OutfitItems::from_selection(selected)?;

        let outfit = self.assemble(items, &candidates, weather);
        tracing::info!(
            "Generated outfit [{}] overall {:.3}",
            outfit.item_ids.join(", "),
            outfit.scores.overall.total
        );
        Ok(outfit)
    }

    /// Select each slot in order, each seeing the picks before it
    fn select_slots(
        &self,
        slots: &[Slot],
        candidates: &SlotCandidates,
        weather: &WeatherContext,
        exclude_items: &[String],
        options: &SelectionOptions<'_>,
    ) -> Vec<(Slot, EnrichedItem)> {
        let selector = self.selector();
        let mut selected: Vec<(Slot, EnrichedItem)> = Vec::with_capacity(slots.len());

        for &slot in slots {
            let Some(slot_candidates) = candidates.get(&slot) else {
                continue;
            };
            let context = SelectionContext {
                weather,
                selected_items: &selected,
                exclude_items,
                slot,
            };
            let slot_options = SelectionOptions {
                prefer_shorts: slot == Slot::Pants && weather.is_hot,
                ..*options
            };
            let picked = selector.select_best_item(slot_candidates, &context, &slot_options);
            if let Some(item) = picked {
                let item = item.clone();
                selected.push((slot, item));
            }
        }

        selected
    }

    /// Scores, ids and swappability for a finished slot map
    pub(crate) fn assemble(
        &self,
        items: OutfitItems,
        candidates: &SlotCandidates,
        weather: &WeatherContext,
    ) -> GeneratedOutfit {
        let scores = score_outfit(&items, weather, &self.scorer);
        let swappable: BTreeMap<Slot, bool> = items
            .slots()
            .into_iter()
            .map(|slot| (slot, candidates.get(&slot).map_or(0, Vec::len) > 1))
            .collect();

        GeneratedOutfit {
            item_ids: items.item_ids(),
            items,
            scores,
            swappable,
            weather_context: *weather,
            generated_at: Utc::now(),
        }
    }
}

fn selected_in(selected: &[(Slot, EnrichedItem)], slot: Slot) -> Option<&EnrichedItem> {
    selected.iter().find(|(s, _)| *s == slot).map(|(_, item)| item)
}
