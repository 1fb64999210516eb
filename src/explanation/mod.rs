pub mod types;
pub mod generator;
pub mod formatters;

pub use types::{
    DimensionCard, OutfitExplanation, OverallExplanation, Severity, SlotLine, WarningCard,
    WeatherExplanation,
};

pub use generator::ExplanationGenerator;
pub use formatters::{JsonFormatter, MarkdownFormatter};
