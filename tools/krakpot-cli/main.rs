use clap::{Parser, ValueEnum};
use krakpot::prelude::*;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Output format for lookup results.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Everything known about one item, in the shape emitted by `--format json`.
#[derive(Serialize)]
struct ItemReport<'a> {
    recipe: CascadeRecipe,
    direct: &'a [IngredientSlot],
    cascade: Vec<CascadeIngredient>,
    tiers: Vec<Vec<(String, u64)>>,
}

/// Look up crafting recipes, their ingredient cascades and equivalence tiers
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Name of the item to look up (case-insensitive)
    item: Option<String>,

    /// Path to the recipes JSON file
    #[arg(long, default_value = "data/recipes.json")]
    recipes: String,

    /// Path to the item locations JSON file
    #[arg(long, default_value = "data/item_locations.json")]
    locations: String,

    /// Maximum number of substitution passes after tier 0
    #[arg(long, default_value_t = ExpansionLimits::default().max_depth)]
    max_depth: usize,

    /// Maximum quantity of a single ingredient expanded per pass
    #[arg(long, default_value_t = ExpansionLimits::default().max_expand_per_item)]
    max_expand: u64,

    /// How to print the results
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if cli.human {
        run_interactive(cli);
    } else {
        run_non_interactive(cli);
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("krakpot=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn load_index(recipes_path: &str, locations_path: &str) -> RecipeIndex {
    let load_start = Instant::now();
    let dataset = Dataset::from_files(recipes_path, locations_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load dataset: {}", e)));
    let index = RecipeIndex::from_dataset(&dataset);
    info!(
        recipes = index.len(),
        elapsed = ?load_start.elapsed(),
        "Loaded recipe data"
    );
    index
}

fn run_lookup(index: &RecipeIndex, item: &str, limits: ExpansionLimits, format: OutputFormat) {
    let Some(recipe) = index.get_recipe(item) else {
        println!("No recipe found for '{}'.", item);
        let suggestions = index.search(item);
        if !suggestions.is_empty() {
            println!("Did you mean:");
            for name in suggestions.iter().take(10) {
                println!("  - {}", name);
            }
        }
        return;
    };

    let query_start = Instant::now();
    let cascade = index.cascade(&recipe.name);
    let tiers = TierExpander::with_limits(index, limits).expand(&recipe.name);
    debug!(
        cascade = cascade.len(),
        tiers = tiers.len(),
        elapsed = ?query_start.elapsed(),
        "Computed item report"
    );

    match format {
        OutputFormat::Text => {
            println!("{}", ReportFormatter::format_header(&recipe));
            if let Some(image) = &recipe.image {
                println!("Image: {}", image);
            }

            let direct = ReportFormatter::format_direct(index, &recipe.name);
            if !direct.is_empty() {
                println!("\nDirect Ingredients\n{}", direct);
            }
            if !recipe.locations.is_empty() {
                println!("\nLocations: {}", recipe.locations.join(", "));
            }
            println!("\nCascade\n{}", ReportFormatter::format_cascade(&cascade));
            let tiers_text = ReportFormatter::format_tiers(&tiers);
            if !tiers_text.is_empty() {
                println!("\nEquivalent Totals\n{}", tiers_text);
            }
        }
        OutputFormat::Json => {
            let report = ItemReport {
                direct: index.direct_ingredients(&recipe.name),
                recipe,
                cascade,
                tiers: tiers.iter().map(Tier::sorted_entries).collect(),
            };
            let json = serde_json::to_string_pretty(&report)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize report: {}", e)));
            println!("{}", json);
        }
    }
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let item = cli.item.unwrap_or_else(|| {
        exit_with_error("An item name is required in non-interactive mode.");
    });
    let index = load_index(&cli.recipes, &cli.locations);
    let limits = ExpansionLimits {
        max_depth: cli.max_depth,
        max_expand_per_item: cli.max_expand,
    };
    run_lookup(&index, &item, limits, cli.format);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(cli: Cli) {
    println!("--- Krakpot Interactive Mode ---");

    let recipes_path = prompt_for_input("Enter recipes path", Some(&cli.recipes));
    let locations_path = prompt_for_input("Enter locations path", Some(&cli.locations));
    let index = load_index(&recipes_path, &locations_path);
    let limits = ExpansionLimits {
        max_depth: cli.max_depth,
        max_expand_per_item: cli.max_expand,
    };

    loop {
        let item = prompt_for_input("Enter an item name (empty to quit)", None);
        if item.is_empty() {
            break;
        }
        run_lookup(&index, &item, limits, cli.format);
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }

    if let Err(e) = io::stdin().read_line(&mut line) {
        exit_with_error(&format!("Failed to read line: {}", e));
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
