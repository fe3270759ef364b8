//! Common test utilities for building small recipe datasets.
use krakpot::prelude::*;

/// Potion, Elixir and friends.
///
/// - `Potion` = Medicinal Herb x2
/// - `Elixir` = Potion x2, Yggdrasil Leaf x1
/// - `Hi-Potion` = Potion x3, Strong Medicine x1
/// - `Strong Medicine` = Medicinal Herb x1, Fresh Water x1
#[allow(dead_code)]
pub fn create_potion_index() -> RecipeIndex {
    RecipeIndex::builder()
        .with_recipe(
            Recipe::new("Potion")
                .with_kind("Items")
                .with_ingredient("Medicinal Herb", 2),
        )
        .with_recipe(
            Recipe::new("Elixir")
                .with_kind("Items")
                .with_notes("Restores everything")
                .with_ingredient("Potion", 2)
                .with_ingredient("Yggdrasil Leaf", 1),
        )
        .with_recipe(
            Recipe::new("Hi-Potion")
                .with_kind("Items")
                .with_ingredient("Potion", 3)
                .with_ingredient("Strong Medicine", 1),
        )
        .with_recipe(
            Recipe::new("Strong Medicine")
                .with_kind("Items")
                .with_ingredient("Medicinal Herb", 1)
                .with_ingredient("Fresh Water", 1),
        )
        .with_locations("Medicinal Herb", ["Angel Falls", "Stornway"])
        .with_locations("Fresh Water", ["Coffinwell"])
        .with_locations("Elixir", ["Bloomingdale shop"])
        .build()
}

/// Recipes that refer back to themselves.
///
/// - `Ouroboros` = Ouroboros x1, Scale x2 (direct self-reference)
/// - `Chicken` = Egg x1, `Egg` = Chicken x1 (two-step cycle)
#[allow(dead_code)]
pub fn create_cyclic_index() -> RecipeIndex {
    RecipeIndex::builder()
        .with_recipe(
            Recipe::new("Ouroboros")
                .with_ingredient("Ouroboros", 1)
                .with_ingredient("Scale", 2),
        )
        .with_recipe(Recipe::new("Chicken").with_ingredient("Egg", 1))
        .with_recipe(Recipe::new("Egg").with_ingredient("Chicken", 1))
        .with_locations("Scale", ["Zere Rocks"])
        .build()
}

#[allow(dead_code)]
pub const RECIPES_JSON: &str = r#"{
  "recipes": [
    { "result": "Potion", "type": "Items", "notes": "", "item1": "Medicinal Herb", "qty1": "2" },
    { "result": "Elixir", "type": "Items", "alchemiracle": true,
      "item1": "potion", "qty1": 2, "item2": "Yggdrasil Leaf", "qty2": 1, "item3": "", "qty3": "" },
    { "result": "Broken", "item1": "Mystery", "qty1": "lots", "item2": "Negative", "qty2": -4,
      "item3": null, "qty3": null },
    { "result": "", "item1": "Nothing", "qty1": 1 },
    { "result": "  Iron Sword ", "type": "Swords", "image": "swords/iron.png",
      "item1": "Iron Ore", "qty1": 3.0 }
  ]
}"#;

#[allow(dead_code)]
pub const LOCATIONS_JSON: &str = r#"{
  "locations": [
    { "result": "Medicinal Herb", "location": ["Angel Falls", "Stornway"] },
    { "result": "Iron Ore", "location": null },
    { "result": "Yggdrasil Leaf" },
    { "result": "", "location": ["Nowhere"] }
  ]
}"#;
