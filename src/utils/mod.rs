//! Utility modules for outfit generation
//!
//! Contains shared functionality used across enrichment, scoring and selection:
//! - Lookup tables: Material keywords and colour groups
//! - Colour family: Accessory families and palette temperature
//! - Hashing: Deterministic seeded variation

pub mod lookup_tables;
pub mod color_family;
pub mod hashing;

// Re-export commonly used types
pub use color_family::{AccessoryFamily, PaletteGroup};
pub use hashing::{Fnv1aHasher, VariationHasher};
pub use lookup_tables::{contains_any, has_word_in};
