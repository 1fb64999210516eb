//! Outfit Engine
//!
//! Deterministic outfit generation from a wardrobe snapshot and a weather
//! descriptor.
//!
//! Module layout:
//! - `slots/`, `enrichment/`: category to slot mapping and derived item metadata
//! - `metrics/`: the four compatibility dimensions, combined by `scorer`
//! - `inclusion/`, `selector/`: which slots take part and which item fills each
//! - `generator/`, `swap/`: two-pass assembly and single-slot replacement
//! - `explanation/`: star rating, dimension cards and JSON/Markdown output
//! - `utils/`: keyword tables, colour families, seeded hashing
//!
//! Every operation is a pure function of its inputs; the same inputs and
//! variation seed always produce the same outfit.

pub mod types;
pub mod config;
pub mod error;
pub mod weather;
pub mod utils;
pub mod slots;
pub mod enrichment;
pub mod metrics;
pub mod scorer;
pub mod outfit;
pub mod inclusion;
pub mod selector;
pub mod generator;
pub mod swap;
pub mod explanation;

// Re-export commonly used types
pub use config::{GeneratorConfig, ScoreWeights, SelectionParams, WeatherThresholds};
pub use enrichment::{enrich_item, enrich_items};
pub use error::OutfitError;
pub use explanation::{ExplanationGenerator, JsonFormatter, MarkdownFormatter, OutfitExplanation};
pub use generator::{GenerateOptions, OutfitGenerator};
pub use inclusion::{determine_included_categories, CoreSelections};
pub use metrics::{calculate_compatibility_score, ScoringContext};
pub use outfit::{GeneratedOutfit, OutfitItems, OutfitScores};
pub use scorer::{CompatibilityScorer, StandardScorer};
pub use selector::{ItemSelector, SelectionContext, SelectionOptions};
pub use slots::{group_items_by_slot, has_required_categories, Slot};
pub use swap::SwapOptions;
pub use types::{CompatibilityScore, EnrichedItem, FormalityBand, WardrobeItem};
pub use utils::{Fnv1aHasher, VariationHasher};
pub use weather::{WeatherBand, WeatherContext, WeatherReading};
