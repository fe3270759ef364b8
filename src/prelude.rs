//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the krakpot crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use krakpot::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let dataset = Dataset::from_files("data/recipes.json", "data/item_locations.json")?;
//! let index = RecipeIndex::from_dataset(&dataset);
//!
//! for tier in index.equivalence_tiers("Elixir", 8, 250) {
//!     println!("{:?}", tier.sorted_entries());
//! }
//! # Ok(())
//! # }
//! ```

// Lookup and expansion
pub use crate::cascade::{CascadeIngredient, CascadeWalker};
pub use crate::index::{RecipeIndex, RecipeIndexBuilder};
pub use crate::tiers::{ExpansionLimits, Tier, TierExpander};

// Data structures
pub use crate::data::{Dataset, LocationRecord, RecipeRecord};
pub use crate::recipe::{CascadeRecipe, IngredientSlot, Recipe, canonical_key};

// Error types
pub use crate::error::DataError;

// Report formatting
pub use crate::report::ReportFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
