//! Weather context
//!
//! A fixed-shape descriptor of the day's weather. Exactly one temperature band
//! flag is set; `target_weight` is the overall warmth the outfit should reach.

use serde::{Deserialize, Serialize};

use crate::config::WeatherThresholds;
use crate::error::OutfitError;

/// Temperature band, derived from the band flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherBand {
    Cold,
    Mild,
    Warm,
    Hot,
}

impl WeatherBand {
    /// Warmth target for the band (cold needs the most coverage)
    pub fn target_weight(&self) -> u8 {
        match self {
            WeatherBand::Cold => 3,
            WeatherBand::Mild => 2,
            WeatherBand::Warm => 1,
            WeatherBand::Hot => 0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WeatherBand::Cold => "Cold",
            WeatherBand::Mild => "Mild",
            WeatherBand::Warm => "Warm",
            WeatherBand::Hot => "Hot",
        }
    }
}

/// Raw forecast values, temperatures in °C
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub current_temp: f64,
    pub high_temp: f64,
    pub low_temp: f64,
    /// Probability of precipitation, 0-1
    pub precip_chance: f64,
}

/// Normalized weather descriptor consumed by the generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherContext {
    pub is_cold: bool,
    pub is_mild: bool,
    pub is_warm: bool,
    pub is_hot: bool,
    pub is_rain_likely: bool,
    pub daily_swing: f64,
    pub has_large_swing: bool,
    /// 0-3
    pub target_weight: u8,
    pub current_temp: f64,
    pub high_temp: f64,
    pub low_temp: f64,
    pub precip_chance: f64,
}

impl WeatherContext {
    /// Normalize a forecast reading
    pub fn from_reading(reading: &WeatherReading, thresholds: &WeatherThresholds) -> Self {
        let (low, high) = if reading.high_temp >= reading.low_temp {
            (reading.low_temp, reading.high_temp)
        } else {
            (reading.high_temp, reading.low_temp)
        };

        let current = reading.current_temp;
        let band = if current < thresholds.cold_below {
            WeatherBand::Cold
        } else if current < thresholds.mild_below {
            WeatherBand::Mild
        } else if current < thresholds.warm_below {
            WeatherBand::Warm
        } else {
            WeatherBand::Hot
        };

        let precip_chance = if reading.precip_chance.is_nan() {
            0.0
        } else {
            reading.precip_chance.clamp(0.0, 1.0)
        };
        let daily_swing = high - low;

        Self::for_band(band)
            .with_temps(current, high, low)
            .with_precip(precip_chance, precip_chance >= thresholds.rain_likely_at)
            .with_swing(daily_swing, daily_swing >= thresholds.large_swing_at)
    }

    /// Context for a band with neutral temperatures, no rain and no swing
    pub fn for_band(band: WeatherBand) -> Self {
        let temp = match band {
            WeatherBand::Cold => 5.0,
            WeatherBand::Mild => 14.0,
            WeatherBand::Warm => 22.0,
            WeatherBand::Hot => 30.0,
        };
        Self {
            is_cold: band == WeatherBand::Cold,
            is_mild: band == WeatherBand::Mild,
            is_warm: band == WeatherBand::Warm,
            is_hot: band == WeatherBand::Hot,
            is_rain_likely: false,
            daily_swing: 0.0,
            has_large_swing: false,
            target_weight: band.target_weight(),
            current_temp: temp,
            high_temp: temp,
            low_temp: temp,
            precip_chance: 0.0,
        }
    }

    pub fn with_target_weight(mut self, target_weight: u8) -> Self {
        self.target_weight = target_weight.min(3);
        self
    }

    pub fn with_temps(mut self, current: f64, high: f64, low: f64) -> Self {
        self.current_temp = current;
        self.high_temp = high;
        self.low_temp = low;
        self
    }

    pub fn with_precip(mut self, precip_chance: f64, rain_likely: bool) -> Self {
        self.precip_chance = precip_chance;
        self.is_rain_likely = rain_likely;
        self
    }

    pub fn with_swing(mut self, daily_swing: f64, large: bool) -> Self {
        self.daily_swing = daily_swing;
        self.has_large_swing = large;
        self
    }

    /// Band implied by the flags. Falls back to the target weight when the
    /// flags are inconsistent.
    pub fn band(&self) -> WeatherBand {
        if self.is_cold {
            WeatherBand::Cold
        } else if self.is_mild {
            WeatherBand::Mild
        } else if self.is_warm {
            WeatherBand::Warm
        } else if self.is_hot {
            WeatherBand::Hot
        } else {
            match self.target_weight {
                3.. => WeatherBand::Cold,
                2 => WeatherBand::Mild,
                1 => WeatherBand::Warm,
                0 => WeatherBand::Hot,
            }
        }
    }

    /// Check the shape invariants of the descriptor
    pub fn validate(&self) -> Result<(), OutfitError> {
        let flags = [self.is_cold, self.is_mild, self.is_warm, self.is_hot];
        let set = flags.iter().filter(|f| **f).count();
        if set != 1 {
            return Err(OutfitError::InvalidWeather {
                reason: format!("expected exactly one temperature band, found {}", set),
            });
        }
        if self.target_weight > 3 {
            return Err(OutfitError::InvalidWeather {
                reason: format!("target weight {} outside 0-3", self.target_weight),
            });
        }
        if self.daily_swing < 0.0 {
            return Err(OutfitError::InvalidWeather {
                reason: format!("negative daily swing {}", self.daily_swing),
            });
        }
        if self.high_temp < self.low_temp {
            return Err(OutfitError::InvalidWeather {
                reason: format!("high {} below low {}", self.high_temp, self.low_temp),
            });
        }
        if !(0.0..=1.0).contains(&self.precip_chance) {
            return Err(OutfitError::InvalidWeather {
                reason: format!("precipitation chance {} outside 0-1", self.precip_chance),
            });
        }
        Ok(())
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        let mut parts = vec![format!(
            "{} ({:.0}°C, {:.0}-{:.0}°C)",
            self.band().display_name(),
            self.current_temp,
            self.low_temp,
            self.high_temp
        )];
        if self.is_rain_likely {
            parts.push(format!("rain likely ({:.0}%)", self.precip_chance * 100.0));
        }
        if self.has_large_swing {
            parts.push(format!("large swing of {:.0}°C", self.daily_swing));
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(current: f64, high: f64, low: f64, precip: f64) -> WeatherReading {
        WeatherReading {
            current_temp: current,
            high_temp: high,
            low_temp: low,
            precip_chance: precip,
        }
    }

    #[test]
    fn test_bands_and_targets() {
        let t = WeatherThresholds::default();
        let cold = WeatherContext::from_reading(&reading(4.0, 6.0, 1.0, 0.1), &t);
        assert!(cold.is_cold && !cold.is_mild && !cold.is_warm && !cold.is_hot);
        assert_eq!(cold.target_weight, 3);

        let mild = WeatherContext::from_reading(&reading(10.0, 12.0, 8.0, 0.0), &t);
        assert!(mild.is_mild);
        assert_eq!(mild.target_weight, 2);

        let warm = WeatherContext::from_reading(&reading(20.0, 22.0, 15.0, 0.0), &t);
        assert!(warm.is_warm);
        assert_eq!(warm.target_weight, 1);

        let hot = WeatherContext::from_reading(&reading(30.0, 33.0, 24.0, 0.0), &t);
        assert!(hot.is_hot);
        assert_eq!(hot.target_weight, 0);
    }

    #[test]
    fn test_rain_and_swing_flags() {
        let t = WeatherThresholds::default();
        let ctx = WeatherContext::from_reading(&reading(12.0, 19.0, 6.0, 0.7), &t);
        assert!(ctx.is_rain_likely);
        assert!(ctx.has_large_swing);
        assert_eq!(ctx.daily_swing, 13.0);
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_inverted_high_low_is_repaired() {
        let t = WeatherThresholds::default();
        let ctx = WeatherContext::from_reading(&reading(15.0, 10.0, 20.0, 1.4), &t);
        assert_eq!(ctx.high_temp, 20.0);
        assert_eq!(ctx.low_temp, 10.0);
        assert_eq!(ctx.precip_chance, 1.0);
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_multiple_bands() {
        let mut ctx = WeatherContext::for_band(WeatherBand::Mild);
        ctx.is_hot = true;
        assert!(matches!(ctx.validate(), Err(OutfitError::InvalidWeather { .. })));
    }
}
