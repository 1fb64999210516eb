use crate::explanation::types::*;
use crate::outfit::GeneratedOutfit;
use crate::slots::Slot;
use crate::types::CompatibilityScore;
use crate::utils::contains_any;
use crate::utils::lookup_tables::RAIN_SENSITIVE_MATERIALS;
use crate::weather::{WeatherBand, WeatherContext};

/// Pair totals below this get a warning card
pub const WEAK_PAIR_THRESHOLD: f64 = 0.5;

/// Main explanation generator
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Generate a complete explanation for a generated or swapped outfit
    pub fn generate(outfit: &GeneratedOutfit) -> OutfitExplanation {
        let overall = Self::generate_overall(outfit.scores.overall.total * 100.0);
        let weather = Self::generate_weather(&outfit.weather_context);

        let slots = outfit
            .items
            .iter()
            .map(|(slot, item)| SlotLine {
                slot,
                item_id: item.id().to_string(),
                name: item.name().to_string(),
                color: item.color().map(str::to_string),
                formality_band: item.formality_band,
                swappable: outfit.swappable.get(&slot).copied().unwrap_or(false),
            })
            .collect();

        let dimensions = Self::format_dimensions(&outfit.scores.overall);

        let mut warnings = Vec::new();
        if let Some(warning) = Self::weakest_pair_warning(outfit) {
            warnings.push(warning);
        }
        if let Some(warning) = Self::rain_shoes_warning(outfit) {
            warnings.push(warning);
        }

        OutfitExplanation {
            overall,
            weather,
            slots,
            dimensions,
            warnings,
        }
    }

    /// Generate overall score interpretation with stars
    fn generate_overall(score: f64) -> OverallExplanation {
        let (stars, label) = match score {
            s if s >= 90.0 => ("★★★★★", "Exceptional"),
            s if s >= 80.0 => ("★★★★☆", "Excellent"),
            s if s >= 70.0 => ("★★★☆☆", "Good"),
            s if s >= 60.0 => ("★★☆☆☆", "Fair"),
            s if s >= 50.0 => ("★☆☆☆☆", "Poor"),
            _ => ("☆☆☆☆☆", "Unsuitable"),
        };

        OverallExplanation {
            score,
            stars: stars.to_string(),
            label: label.to_string(),
            message: format!("Overall outfit compatibility: {:.1}/100", score),
        }
    }

    fn generate_weather(weather: &WeatherContext) -> WeatherExplanation {
        let band = weather.band();
        let mut message = match band {
            WeatherBand::Cold => "Cold day: warm outer layer and undershirt",
            WeatherBand::Mild => "Mild day: a light layer over the shirt",
            WeatherBand::Warm => "Warm day: single layer",
            WeatherBand::Hot => "Hot day: lightest pieces, no undershirt",
        }
        .to_string();
        if weather.is_rain_likely {
            message.push_str("; rain-ready shoes preferred");
        }

        WeatherExplanation {
            band,
            summary: weather.summary(),
            message,
        }
    }

    /// One card per dimension of the overall score
    fn format_dimensions(overall: &CompatibilityScore) -> Vec<DimensionCard> {
        let dimensions = [
            ("weather_fit", "Weather Fit", overall.weather_fit),
            ("formality_alignment", "Formality Alignment", overall.formality_alignment),
            ("color_harmony", "Colour Harmony", overall.color_harmony),
            ("capsule_cohesion", "Capsule Cohesion", overall.capsule_cohesion),
        ];

        dimensions
            .iter()
            .map(|(code, name, raw)| {
                let score = raw * 100.0;
                let interpretation = match score {
                    s if s >= 80.0 => "Excellent",
                    s if s >= 60.0 => "Good",
                    s if s >= 40.0 => "Fair",
                    _ => "Poor",
                };
                DimensionCard {
                    code: code.to_string(),
                    name: name.to_string(),
                    score,
                    raw: *raw,
                    interpretation: interpretation.to_string(),
                    severity: Severity::from_score(score),
                }
            })
            .collect()
    }

    /// Warn about the lowest scoring pair when it falls below the threshold
    fn weakest_pair_warning(outfit: &GeneratedOutfit) -> Option<WarningCard> {
        let (key, score) = outfit
            .scores
            .pairwise
            .iter()
            .min_by(|a, b| a.1.total.total_cmp(&b.1.total))?;
        if score.total >= WEAK_PAIR_THRESHOLD {
            return None;
        }

        let (first, second) = key.split_once('-')?;
        let (weakest_name, weakest_value) = [
            ("weather fit", score.weather_fit),
            ("formality", score.formality_alignment),
            ("colour", score.color_harmony),
            ("capsule", score.capsule_cohesion),
        ]
        .into_iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))?;

        // Advise swapping the non-core piece when there is one
        let swap_target = match (Slot::parse(first), Slot::parse(second)) {
            (Some(a), Some(b)) if a.is_core() && !b.is_core() => b,
            (Some(a), _) => a,
            _ => return None,
        };

        Some(WarningCard {
            warning_type: "weak_pair".to_string(),
            severity: Severity::from_score(score.total * 100.0),
            icon: Severity::from_score(score.total * 100.0).icon().to_string(),
            message: format!("{} and {} work poorly together", first, second),
            detail: format!(
                "Pair score {:.1}/100, weakest on {} ({:.1}/100)",
                score.total * 100.0,
                weakest_name,
                weakest_value * 100.0
            ),
            advice: format!("Try swapping the {}", swap_target),
        })
    }

    fn rain_shoes_warning(outfit: &GeneratedOutfit) -> Option<WarningCard> {
        if !outfit.weather_context.is_rain_likely {
            return None;
        }
        let shoes = &outfit.items.shoes;
        let material = shoes.material()?.to_lowercase();
        if !contains_any(&material, RAIN_SENSITIVE_MATERIALS) {
            return None;
        }

        Some(WarningCard {
            warning_type: "rain_shoes".to_string(),
            severity: Severity::Medium,
            icon: Severity::Medium.icon().to_string(),
            message: format!("{} may not cope with rain", shoes.name()),
            detail: format!(
                "{} shoes with a {:.0}% chance of rain",
                material,
                outfit.weather_context.precip_chance * 100.0
            ),
            advice: "Swap the shoes for leather or rubber-soled pairs".to_string(),
        })
    }
}
