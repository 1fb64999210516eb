//! Generator configuration
//!
//! Every tunable constant of the selection pipeline lives here. The defaults
//! reproduce the reference behaviour exactly; a JSON file may override any
//! subset of fields.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Weights combining the four compatibility dimensions into a total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ScoreWeights {
    pub weather_fit: f64,
    pub formality_alignment: f64,
    pub color_harmony: f64,
    pub capsule_cohesion: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            weather_fit: 0.4,
            formality_alignment: 0.3,
            color_harmony: 0.2,
            capsule_cohesion: 0.1,
        }
    }
}

/// Thresholds and exploration curve for the best-item selector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SelectionParams {
    pub strict_threshold: f64,
    pub moderate_threshold: f64,
    /// Added to a pants candidate named "...shorts..." when shorts are preferred
    pub shorts_bonus: f64,
    pub diversity_margin_base: f64,
    pub diversity_margin_span: f64,
    pub weight_exponent_base: f64,
    pub weight_exponent_span: f64,
    pub shortlist_size: usize,
    /// Relative weight perturbation, 0.05 = ±5%
    pub jitter: f64,
}

impl Default for SelectionParams {
    fn default() -> Self {
        Self {
            strict_threshold: 0.7,
            moderate_threshold: 0.5,
            shorts_bonus: 0.15,
            diversity_margin_base: 0.04,
            diversity_margin_span: 0.18,
            weight_exponent_base: 2.2,
            weight_exponent_span: 1.3,
            shortlist_size: 6,
            jitter: 0.05,
        }
    }
}

impl SelectionParams {
    /// Score window below the best strict match that still competes
    pub fn diversity_margin(&self, exploration: f64) -> f64 {
        self.diversity_margin_base + exploration * self.diversity_margin_span
    }

    /// Exponent applied to scores before weighted choice
    pub fn weight_exponent(&self, exploration: f64) -> f64 {
        self.weight_exponent_base - exploration * self.weight_exponent_span
    }
}

/// Temperature bands (°C) used to normalize a raw weather reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct WeatherThresholds {
    /// Below this is cold
    pub cold_below: f64,
    /// Below this (and not cold) is mild
    pub mild_below: f64,
    /// Below this (and not mild) is warm; anything else is hot
    pub warm_below: f64,
    pub rain_likely_at: f64,
    pub large_swing_at: f64,
}

impl Default for WeatherThresholds {
    fn default() -> Self {
        Self {
            cold_below: 10.0,
            mild_below: 18.0,
            warm_below: 26.0,
            rain_likely_at: 0.5,
            large_swing_at: 10.0,
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub weights: ScoreWeights,
    pub selection: SelectionParams,
    pub weather: WeatherThresholds,
}

impl GeneratorConfig {
    /// Load configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read generator config: {:?}", path))?;

        let config: GeneratorConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse generator config JSON")?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the selector cannot work with
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        let weight_sum =
            w.weather_fit + w.formality_alignment + w.color_harmony + w.capsule_cohesion;
        if [w.weather_fit, w.formality_alignment, w.color_harmony, w.capsule_cohesion]
            .iter()
            .any(|v| *v < 0.0)
        {
            anyhow::bail!("Score weights must be non-negative");
        }
        if (weight_sum - 1.0).abs() > 1e-6 {
            anyhow::bail!("Score weights must sum to 1.0 (got {:.4})", weight_sum);
        }

        let s = &self.selection;
        if s.moderate_threshold > s.strict_threshold {
            anyhow::bail!(
                "Moderate threshold {} exceeds strict threshold {}",
                s.moderate_threshold,
                s.strict_threshold
            );
        }
        if s.shortlist_size == 0 {
            anyhow::bail!("Shortlist size must be at least 1");
        }
        if !(0.0..1.0).contains(&s.jitter) {
            anyhow::bail!("Jitter must be in [0, 1), got {}", s.jitter);
        }

        let t = &self.weather;
        if !(t.cold_below <= t.mild_below && t.mild_below <= t.warm_below) {
            anyhow::bail!("Temperature bands must be ascending");
        }

        Ok(())
    }
}
