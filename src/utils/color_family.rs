//! Colour classification
//!
//! Two independent groupings:
//! - Accessory family (black / brown / other), used only for the belt-shoe rule
//! - Palette temperature (neutral / warm / cool), used for colour harmony

use serde::{Deserialize, Serialize};

use super::lookup_tables::{
    has_word_in, BLACK_FAMILY, BROWN_FAMILY, COOL_COLORS, NEUTRAL_COLORS, WARM_COLORS,
};

/// Coarse leather colour family for belts and shoes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessoryFamily {
    Black,
    Brown,
    Other,
}

impl AccessoryFamily {
    /// Classify a colour string. Brown words win over black words so that
    /// "dark brown" reads as brown.
    pub fn from_color(color: Option<&str>) -> Self {
        let Some(color) = color else {
            return AccessoryFamily::Other;
        };
        let lowered = color.trim().to_lowercase();

        if has_word_in(&lowered, BROWN_FAMILY) {
            AccessoryFamily::Brown
        } else if has_word_in(&lowered, BLACK_FAMILY) {
            AccessoryFamily::Black
        } else {
            AccessoryFamily::Other
        }
    }

    /// Only strictly black against strictly brown clashes
    pub fn is_compatible_with(&self, other: AccessoryFamily) -> bool {
        !matches!(
            (self, other),
            (AccessoryFamily::Black, AccessoryFamily::Brown)
                | (AccessoryFamily::Brown, AccessoryFamily::Black)
        )
    }
}

/// Palette temperature of a garment colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteGroup {
    Neutral,
    Warm,
    Cool,
    Unknown,
}

impl PaletteGroup {
    pub fn from_color(color: Option<&str>) -> Self {
        let Some(color) = color else {
            return PaletteGroup::Unknown;
        };
        let lowered = color.trim().to_lowercase();

        if has_word_in(&lowered, NEUTRAL_COLORS) {
            PaletteGroup::Neutral
        } else if has_word_in(&lowered, WARM_COLORS) {
            PaletteGroup::Warm
        } else if has_word_in(&lowered, COOL_COLORS) {
            PaletteGroup::Cool
        } else {
            PaletteGroup::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessory_families() {
        assert_eq!(AccessoryFamily::from_color(Some("Black")), AccessoryFamily::Black);
        assert_eq!(AccessoryFamily::from_color(Some("charcoal")), AccessoryFamily::Black);
        assert_eq!(AccessoryFamily::from_color(Some("Cognac Tan")), AccessoryFamily::Brown);
        assert_eq!(AccessoryFamily::from_color(Some("dark brown")), AccessoryFamily::Brown);
        assert_eq!(AccessoryFamily::from_color(Some("navy")), AccessoryFamily::Other);
        assert_eq!(AccessoryFamily::from_color(None), AccessoryFamily::Other);
    }

    #[test]
    fn test_only_black_brown_clash() {
        use AccessoryFamily::*;
        assert!(!Black.is_compatible_with(Brown));
        assert!(!Brown.is_compatible_with(Black));
        assert!(Black.is_compatible_with(Black));
        assert!(Brown.is_compatible_with(Other));
        assert!(Other.is_compatible_with(Black));
    }

    #[test]
    fn test_palette_groups() {
        assert_eq!(PaletteGroup::from_color(Some("Navy")), PaletteGroup::Neutral);
        assert_eq!(PaletteGroup::from_color(Some("burgundy")), PaletteGroup::Warm);
        assert_eq!(PaletteGroup::from_color(Some("forest green")), PaletteGroup::Cool);
        assert_eq!(PaletteGroup::from_color(Some("chartreuse")), PaletteGroup::Unknown);
    }
}
