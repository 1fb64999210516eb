/// Outfit generation errors.
///
/// All variants are fatal for the call that produced them; the generator
/// never retries internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OutfitError {
    #[error("wardrobe is missing required categories: {}", missing.join(", "))]
    MissingRequiredCategories { missing: Vec<String> },

    #[error("category '{category}' is not in the current outfit")]
    CategoryNotInOutfit { category: String },

    #[error("no alternatives available for '{category}'")]
    NoAlternatives { category: String },

    #[error("no {slot} could be selected for the outfit")]
    IncompleteOutfit { slot: String },

    #[error("invalid weather context: {reason}")]
    InvalidWeather { reason: String },
}
