use serde::{Deserialize, Serialize};

use crate::slots::Slot;
use crate::types::FormalityBand;
use crate::weather::WeatherBand;

/// Complete explanation for an outfit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitExplanation {
    pub overall: OverallExplanation,
    pub weather: WeatherExplanation,
    pub slots: Vec<SlotLine>,
    pub dimensions: Vec<DimensionCard>,
    pub warnings: Vec<WarningCard>,
}

/// Overall score interpretation with stars
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallExplanation {
    pub score: f64,    // 0-100
    pub stars: String, // "★★★★☆"
    pub label: String, // "Excellent" / "Good" / "Fair" / "Poor"
    pub message: String,
}

/// Weather the outfit was built for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherExplanation {
    pub band: WeatherBand,
    pub summary: String, // "Mild (14°C, 9-19°C), rain likely (60%)"
    pub message: String,
}

/// One populated slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotLine {
    pub slot: Slot,
    pub item_id: String,
    pub name: String,
    pub color: Option<String>,
    pub formality_band: FormalityBand,
    pub swappable: bool,
}

/// One compatibility dimension of the overall score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionCard {
    pub code: String,           // "weather_fit"
    pub name: String,           // "Weather Fit"
    pub score: f64,             // Display score (0-100)
    pub raw: f64,               // Raw score (0-1)
    pub interpretation: String, // "Excellent" / "Good" / "Fair" / "Poor"
    pub severity: Severity,
}

/// Warning card for potential issues
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarningCard {
    pub warning_type: String, // "weak_pair", "rain_shoes"
    pub severity: Severity,
    pub icon: String,
    pub message: String,
    pub detail: String,
    pub advice: String,
}

/// Severity level for warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    None,
    Info,
    Low,
    Medium,
    High,
}

impl Severity {
    /// Derive severity from a score (0-100)
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => Severity::None,
            s if s >= 60.0 => Severity::Low,
            s if s >= 40.0 => Severity::Medium,
            _ => Severity::High,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::None | Severity::Info => "ℹ️",
            Severity::Low => "⚡",
            Severity::Medium => "⚠️",
            Severity::High => "🚨",
        }
    }
}
