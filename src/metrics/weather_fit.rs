//! DIMENSION 1: WEATHER FIT
//!
//! How closely an item's warmth matches what the day calls for.
//!
//! Expected weight depends on the slot:
//!   - Layers (jacket, overshirt): the full target weight
//!   - Base garments and shoes: half the target, rounded up
//!   - Accessories: weather-neutral, always a perfect fit
//!
//! Modifiers: rain (shoe materials), large daily swing (layering pieces),
//! season tags that contradict the temperature band.

use crate::slots::{slot_of, Slot};
use crate::types::EnrichedItem;
use crate::utils::lookup_tables::{contains_any, RAIN_READY_KEYWORDS, RAIN_SENSITIVE_MATERIALS};
use crate::weather::WeatherContext;

const RAIN_PENALTY: f64 = 0.3;
const RAIN_BONUS: f64 = 0.1;
const SWING_BONUS: f64 = 0.1;
const SEASON_PENALTY: f64 = 0.2;

/// Warmth the slot should contribute for the given target
pub fn expected_weight(slot: Option<Slot>, target_weight: u8) -> Option<u8> {
    match slot {
        Some(s) if s.is_accessory() => None,
        Some(s) if s.is_layer() => Some(target_weight),
        _ => Some(target_weight.div_ceil(2)),
    }
}

/// Calculate weather fit in [0, 1]
pub fn calculate_weather_fit(item: &EnrichedItem, weather: &WeatherContext) -> f64 {
    let slot = slot_of(item);
    let Some(expected) = expected_weight(slot, weather.target_weight) else {
        return 1.0;
    };

    let diff = (item.weather_weight as f64 - expected as f64).abs();
    let mut fit = 1.0 - diff / 3.0;

    // Rain: shoes take the brunt
    if weather.is_rain_likely && slot == Some(Slot::Shoes) {
        let material = item.material().unwrap_or("").to_lowercase();
        let name = item.name().to_lowercase();
        if contains_any(&material, RAIN_SENSITIVE_MATERIALS) {
            fit -= RAIN_PENALTY;
        } else if contains_any(&material, RAIN_READY_KEYWORDS)
            || contains_any(&name, RAIN_READY_KEYWORDS)
        {
            fit += RAIN_BONUS;
        }
    }

    // Large swing: pieces that can be added or shed
    if weather.has_large_swing && matches!(slot, Some(Slot::Overshirt) | Some(Slot::Undershirt)) {
        fit += SWING_BONUS;
    }

    // Season tags that contradict the band
    let tagged = |season: &str| item.item.season.iter().any(|s| s.eq_ignore_ascii_case(season));
    if (weather.is_cold && tagged("summer")) || (weather.is_hot && tagged("winter")) {
        fit -= SEASON_PENALTY;
    }

    fit.clamp(0.0, 1.0)
}
