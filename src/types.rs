//! Core wardrobe data types
//!
//! Raw items come from the wardrobe store untouched. Enriched items carry the
//! derived formality band and weather weight for the lifetime of one
//! generation call.

use serde::{Deserialize, Serialize};

use crate::config::ScoreWeights;

/// Formality used when an item has no score recorded.
pub const NEUTRAL_FORMALITY: u8 = 5;

fn default_active() -> bool {
    true
}

/// A garment or accessory as stored in the user's wardrobe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeItem {
    pub id: String,
    /// Category name, e.g. "Shirt", "Pants", "Belt"
    #[serde(default)]
    pub category: Option<String>,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    /// 1 (very casual) to 10 (black tie)
    #[serde(default)]
    pub formality_score: Option<u8>,
    #[serde(default)]
    pub capsule_tags: Vec<String>,
    #[serde(default)]
    pub season: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl WardrobeItem {
    /// Minimal item with only the fields the generator cannot do without.
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: Some(category.into()),
            name: name.into(),
            brand: None,
            color: None,
            material: None,
            formality_score: None,
            capsule_tags: Vec::new(),
            season: Vec::new(),
            image_url: None,
            active: true,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_formality(mut self, score: u8) -> Self {
        self.formality_score = Some(score);
        self
    }

    pub fn with_capsule_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capsule_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_season<I, S>(mut self, seasons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.season = seasons.into_iter().map(Into::into).collect();
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

/// Coarse formality classification derived from the 1-10 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormalityBand {
    Casual,
    SmartCasual,
    Refined,
}

impl FormalityBand {
    pub fn from_score(score: Option<u8>) -> Self {
        match score.unwrap_or(0) {
            0..=3 => FormalityBand::Casual,
            4..=6 => FormalityBand::SmartCasual,
            _ => FormalityBand::Refined,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FormalityBand::Casual => "casual",
            FormalityBand::SmartCasual => "smart-casual",
            FormalityBand::Refined => "refined",
        }
    }
}

/// Wardrobe item plus inferred metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedItem {
    #[serde(flatten)]
    pub item: WardrobeItem,
    pub formality_band: FormalityBand,
    /// 0 (no warmth) to 3 (heavy outer layer)
    pub weather_weight: u8,
}

impl EnrichedItem {
    pub fn id(&self) -> &str {
        &self.item.id
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn category(&self) -> Option<&str> {
        self.item.category.as_deref()
    }

    pub fn color(&self) -> Option<&str> {
        self.item.color.as_deref()
    }

    pub fn material(&self) -> Option<&str> {
        self.item.material.as_deref()
    }

    /// Raw formality score, 0 when unset
    pub fn formality_or_zero(&self) -> u8 {
        self.item.formality_score.unwrap_or(0)
    }

    /// Formality score for comparisons, neutral when unset
    pub fn formality_or_neutral(&self) -> u8 {
        self.item.formality_score.unwrap_or(NEUTRAL_FORMALITY)
    }
}

/// Four-dimensional compatibility score, every component in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityScore {
    pub weather_fit: f64,
    pub formality_alignment: f64,
    pub color_harmony: f64,
    pub capsule_cohesion: f64,
    pub total: f64,
}

impl CompatibilityScore {
    /// Combine sub-scores into a total with the given weights
    pub fn from_components(
        weather_fit: f64,
        formality_alignment: f64,
        color_harmony: f64,
        capsule_cohesion: f64,
        weights: &ScoreWeights,
    ) -> Self {
        let weather_fit = weather_fit.clamp(0.0, 1.0);
        let formality_alignment = formality_alignment.clamp(0.0, 1.0);
        let color_harmony = color_harmony.clamp(0.0, 1.0);
        let capsule_cohesion = capsule_cohesion.clamp(0.0, 1.0);

        let total = weather_fit * weights.weather_fit
            + formality_alignment * weights.formality_alignment
            + color_harmony * weights.color_harmony
            + capsule_cohesion * weights.capsule_cohesion;

        Self {
            weather_fit,
            formality_alignment,
            color_harmony,
            capsule_cohesion,
            total: total.clamp(0.0, 1.0),
        }
    }

    /// Component-wise mean, re-weighted. `None` for an empty slice.
    pub fn average(scores: &[CompatibilityScore], weights: &ScoreWeights) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let n = scores.len() as f64;
        let mean = |f: fn(&CompatibilityScore) -> f64| scores.iter().map(f).sum::<f64>() / n;

        Some(Self::from_components(
            mean(|s| s.weather_fit),
            mean(|s| s.formality_alignment),
            mean(|s| s.color_harmony),
            mean(|s| s.capsule_cohesion),
            weights,
        ))
    }
}
