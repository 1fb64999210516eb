//! Garment Lookup Tables
//!
//! Keyword and colour tables shared by enrichment and scoring. All tables are
//! read-only statics; matching is done on lowercased text.

// ============================================================================
// MATERIAL / NAME KEYWORDS (weather weight)
// ============================================================================

/// Materials that add warmth (substring match on the material)
pub static HEAVY_MATERIALS: &[&str] = &[
    "wool",
    "cashmere",
    "tweed",
    "fleece",
    "down",
    "shearling",
    "corduroy",
    "flannel",
];

/// Name words that add warmth (whole-word match on the name)
pub static HEAVY_NAME_WORDS: &[&str] = &[
    "parka",
    "puffer",
    "overcoat",
    "peacoat",
    "boot",
    "boots",
    "flannel",
    "fleece",
    "wool",
    "cashmere",
    "tweed",
    "corduroy",
];

/// Materials that remove warmth
pub static LIGHT_MATERIALS: &[&str] = &["linen", "seersucker", "chambray", "mesh", "silk"];

/// Name words that remove warmth
pub static LIGHT_NAME_WORDS: &[&str] = &[
    "shorts",
    "sandal",
    "sandals",
    "tee",
    "tank",
    "linen",
    "seersucker",
];

/// Shoe materials that suffer in rain
pub static RAIN_SENSITIVE_MATERIALS: &[&str] = &["suede", "canvas", "mesh"];

/// Shoe materials and names that handle rain
pub static RAIN_READY_KEYWORDS: &[&str] = &["leather", "rubber", "gore-tex", "boot"];

// ============================================================================
// COLOUR GROUPS
// ============================================================================

/// Accessory family: black and near-black
pub static BLACK_FAMILY: &[&str] = &["black", "charcoal", "grey"];

/// Accessory family: browns and earth tones
pub static BROWN_FAMILY: &[&str] = &[
    "brown",
    "tan",
    "khaki",
    "camel",
    "chocolate",
    "beige",
    "taupe",
    "stone",
    "cream",
];

/// Colours that pair with anything
pub static NEUTRAL_COLORS: &[&str] = &[
    "black",
    "white",
    "grey",
    "gray",
    "charcoal",
    "navy",
    "beige",
    "tan",
    "khaki",
    "cream",
    "brown",
    "camel",
    "stone",
    "taupe",
    "chocolate",
    "denim",
    "indigo",
    "olive",
    "ecru",
    "silver",
];

pub static WARM_COLORS: &[&str] = &[
    "red",
    "orange",
    "yellow",
    "burgundy",
    "maroon",
    "rust",
    "mustard",
    "pink",
    "coral",
    "gold",
];

pub static COOL_COLORS: &[&str] = &[
    "blue",
    "green",
    "purple",
    "teal",
    "lavender",
    "mint",
    "turquoise",
    "sky",
    "forest",
];

/// True when `text` contains any keyword from `table`
pub fn contains_any(text: &str, table: &[&str]) -> bool {
    table.iter().any(|kw| text.contains(kw))
}

/// True when a whitespace/hyphen separated word of `text` is in `table`
pub fn has_word_in(text: &str, table: &[&str]) -> bool {
    text.split(|c: char| c.is_whitespace() || c == '-' || c == '/')
        .any(|word| table.contains(&word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any_matches_substrings() {
        assert!(contains_any("merino wool blend", HEAVY_MATERIALS));
        assert!(contains_any("goose down", HEAVY_MATERIALS));
        assert!(!contains_any("cotton", HEAVY_MATERIALS));
    }

    #[test]
    fn test_has_word_in_matches_whole_words() {
        assert!(has_word_in("dark brown", BROWN_FAMILY));
        assert!(has_word_in("navy/white", NEUTRAL_COLORS));
        assert!(!has_word_in("browned", BROWN_FAMILY));
        assert!(has_word_in("chelsea boots", HEAVY_NAME_WORDS));
        assert!(!has_word_in("steel watch", LIGHT_NAME_WORDS));
    }

    #[test]
    fn test_families_are_disjoint() {
        for colour in BLACK_FAMILY {
            assert!(!BROWN_FAMILY.contains(colour));
        }
    }
}
