use crate::explanation::types::OutfitExplanation;

/// JSON formatter for explanations
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format explanation as pretty-printed JSON
    pub fn format(explanation: &OutfitExplanation) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(explanation)
    }

    /// Format explanation as compact JSON (no whitespace)
    pub fn format_compact(explanation: &OutfitExplanation) -> Result<String, serde_json::Error> {
        serde_json::to_string(explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explanation::types::*;
    use crate::slots::Slot;
    use crate::types::FormalityBand;
    use crate::weather::WeatherBand;

    fn explanation() -> OutfitExplanation {
        OutfitExplanation {
            overall: OverallExplanation {
                score: 85.0,
                stars: "★★★★☆".to_string(),
                label: "Excellent".to_string(),
                message: "Overall outfit compatibility: 85.0/100".to_string(),
            },
            weather: WeatherExplanation {
                band: WeatherBand::Mild,
                summary: "Mild (14°C, 14-14°C)".to_string(),
                message: "Mild day: a light layer over the shirt".to_string(),
            },
            slots: vec![SlotLine {
                slot: Slot::Shirt,
                item_id: "s1".to_string(),
                name: "Oxford".to_string(),
                color: Some("white".to_string()),
                formality_band: FormalityBand::SmartCasual,
                swappable: true,
            }],
            dimensions: vec![],
            warnings: vec![],
        }
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&explanation()).unwrap();

        assert!(json.contains("\"score\": 85.0"));
        assert!(json.contains("\"label\": \"Excellent\""));
        assert!(json.contains("\"slot\": \"shirt\""));
        assert!(json.contains("\"formality_band\": \"smart-casual\""));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&explanation()).unwrap();

        // Compact format should have no newlines (except potentially in strings)
        assert!(!json.contains("\n  "));
    }
}
