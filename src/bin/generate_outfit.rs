// Generate an outfit from a wardrobe snapshot
//
// Usage: cargo run --release --bin generate_outfit -- wardrobe.json --temp 12 --precip 0.6

use anyhow::{Context, Result};
use clap::Parser;
use outfit_engine::{
    ExplanationGenerator, GenerateOptions, GeneratedOutfit, GeneratorConfig, JsonFormatter,
    MarkdownFormatter, OutfitGenerator, SwapOptions, WardrobeItem, WeatherContext, WeatherReading,
};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about = "Generate an outfit for today's weather")]
struct Cli {
    /// JSON array of wardrobe items
    #[arg(value_name = "WARDROBE")]
    wardrobe: PathBuf,

    /// Current temperature in °C
    #[arg(long, default_value_t = 18.0, allow_hyphen_values = true)]
    temp: f64,

    /// Forecast high in °C (defaults to the current temperature)
    #[arg(long, allow_hyphen_values = true)]
    high: Option<f64>,

    /// Forecast low in °C (defaults to the current temperature)
    #[arg(long, allow_hyphen_values = true)]
    low: Option<f64>,

    /// Chance of precipitation, 0-1
    #[arg(long, default_value_t = 0.0)]
    precip: f64,

    /// Variation seed
    #[arg(long)]
    seed: Option<String>,

    /// Exploration level, 0-1
    #[arg(long, default_value_t = 0.0)]
    exploration: f64,

    /// Recently worn item ids to avoid
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// Generator configuration JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Generate this many seeded variations instead of one outfit
    #[arg(long)]
    variations: Option<usize>,

    /// Swap the given slot of the generated outfit
    #[arg(long, value_name = "CATEGORY")]
    swap: Option<String>,

    /// Print JSON instead of markdown
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "outfit_engine=info,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };

    let contents = fs::read_to_string(&cli.wardrobe)
        .with_context(|| format!("Failed to read wardrobe: {:?}", cli.wardrobe))?;
    let wardrobe: Vec<WardrobeItem> = serde_json::from_str(&contents)
        .with_context(|| "Failed to parse wardrobe JSON")?;
    tracing::info!("Loaded {} wardrobe items", wardrobe.len());

    let reading = WeatherReading {
        current_temp: cli.temp,
        high_temp: cli.high.unwrap_or(cli.temp),
        low_temp: cli.low.unwrap_or(cli.temp),
        precip_chance: cli.precip,
    };
    let weather = WeatherContext::from_reading(&reading, &config.weather);
    tracing::info!("Weather: {}", weather.summary());

    let generator = OutfitGenerator::with_config(config);
    let mut options = GenerateOptions::new(wardrobe, weather).with_exclusions(cli.exclude.clone());
    if let Some(seed) = &cli.seed {
        options = options.with_seed(seed.clone(), cli.exploration);
    }
    options.exploration_level = cli.exploration;

    let outfits: Vec<GeneratedOutfit> = match cli.variations {
        Some(count) => generator.generate_variations(&options, count)?,
        None => vec![generator.generate_outfit(&options)?],
    };

    for outfit in outfits {
        let outfit = match &cli.swap {
            Some(category) => generator.swap_item(&SwapOptions {
                current_outfit: &outfit,
                category,
                wardrobe_items: &options.wardrobe_items,
                weather_context: &options.weather_context,
            })?,
            None => outfit,
        };
        print_outfit(&outfit, cli.json)?;
    }

    Ok(())
}

fn print_outfit(outfit: &GeneratedOutfit, json: bool) -> Result<()> {
    let explanation = ExplanationGenerator::generate(outfit);
    if json {
        println!("{}", JsonFormatter::format(&explanation)?);
    } else {
        println!("{}", MarkdownFormatter::format(&explanation));
    }
    Ok(())
}
