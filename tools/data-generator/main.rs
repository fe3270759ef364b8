use clap::Parser;
use krakpot::data::{Dataset, LocationRecord, RecipeRecord};
use rand::seq::IndexedRandom;
use rand::{Rng, rngs::ThreadRng};
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

const KINDS: [&str; 5] = ["Items", "Swords", "Armour", "Shields", "Accessories"];
const PLACES: [&str; 6] = [
    "Angel Falls",
    "Stornway",
    "Coffinwell",
    "Zere Rocks",
    "Bloomingdale",
    "Wormwood Creek",
];

/// A CLI tool to generate a synthetic recipe dataset for krakpot
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated recipes JSON file to
    #[arg(long, default_value = "generated_recipes.json")]
    recipes: String,

    /// The path to write the generated locations JSON file to
    #[arg(long, default_value = "generated_locations.json")]
    locations: String,

    /// Number of raw (non-craftable) materials
    #[arg(long, default_value_t = 20)]
    raw: usize,

    /// Number of craftable layers stacked on top of the raw materials
    #[arg(long, default_value_t = 4)]
    layers: usize,

    /// Number of recipes per craftable layer
    #[arg(long, default_value_t = 10)]
    per_layer: usize,

    /// Number of recipes that list themselves as an ingredient
    #[arg(long, default_value_t = 0)]
    cycles: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .init();

    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.raw == 0 {
        eprintln!("Error: --raw must be at least 1");
        std::process::exit(1);
    }

    info!(
        raw = cli.raw,
        layers = cli.layers,
        per_layer = cli.per_layer,
        "Generating synthetic recipe data"
    );

    let raw_names: Vec<String> = (0..cli.raw).map(|i| format!("Material {}", i + 1)).collect();
    let locations = generate_locations(&mut rng, &raw_names);

    let mut available = raw_names;
    let mut recipes = Vec::new();
    for layer in 1..=cli.layers {
        let layer_names: Vec<String> = (0..cli.per_layer)
            .map(|i| format!("Tier {} Item {}", layer, i + 1))
            .collect();
        for name in &layer_names {
            recipes.push(generate_recipe(&mut rng, name, &available));
        }
        available.extend(layer_names);
    }

    for record in recipes.iter_mut().take(cli.cycles) {
        record.item3 = record.result.clone();
        record.qty3 = 1;
    }

    let dataset = Dataset { recipes, locations };
    fs::write(&cli.recipes, dataset.recipes_to_json()?)?;
    fs::write(&cli.locations, dataset.locations_to_json()?)?;

    info!(
        recipes = dataset.recipes.len(),
        locations = dataset.locations.len(),
        "Wrote '{}' and '{}'",
        cli.recipes,
        cli.locations
    );

    Ok(())
}

/// Builds a recipe from up to three distinct ingredients picked from `available`.
fn generate_recipe(rng: &mut ThreadRng, name: &str, available: &[String]) -> RecipeRecord {
    let count = rng.random_range(1..=3usize).min(available.len());
    let picks: Vec<&String> = available.choose_multiple(rng, count).collect();
    let mut slot = |i: usize| {
        picks
            .get(i)
            .map(|item| (item.to_string(), rng.random_range(1..=5u32)))
            .unwrap_or_default()
    };
    let (item1, qty1) = slot(0);
    let (item2, qty2) = slot(1);
    let (item3, qty3) = slot(2);

    RecipeRecord {
        result: name.to_string(),
        kind: KINDS.choose(rng).copied().unwrap_or("Items").to_string(),
        alchemiracle: rng.random_bool(0.05),
        item1,
        qty1,
        item2,
        qty2,
        item3,
        qty3,
        ..Default::default()
    }
}

fn generate_locations(rng: &mut ThreadRng, raw_names: &[String]) -> Vec<LocationRecord> {
    raw_names
        .iter()
        .map(|name| {
            let count = rng.random_range(1..=2usize);
            LocationRecord {
                result: name.clone(),
                location: PLACES
                    .choose_multiple(rng, count)
                    .map(|p| p.to_string())
                    .collect(),
            }
        })
        .collect()
}
