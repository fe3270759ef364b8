//! # Krakpot - Crafting Recipe Cascade Engine
//!
//! **Krakpot** answers two questions about a crafting dataset: what an item is
//! made of directly, and what it ultimately breaks down to once every
//! craftable ingredient is replaced by its own ingredients.
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Read the recipes and locations tables into a [`data::Dataset`], or
//!     assemble recipes by hand with [`index::RecipeIndex::builder`].
//! 2.  **Build the Index**: [`index::RecipeIndex::from_dataset`] freezes the tables into
//!     case-insensitive lookup maps. The index is immutable from then on.
//! 3.  **Query**:
//!     - [`index::RecipeIndex::direct_ingredients`] for the immediate recipe slots.
//!     - [`index::RecipeIndex::cascade`] for a depth-first trail with totals per root item.
//!     - [`index::RecipeIndex::equivalence_tiers`] for successive levels of full substitution.
//! 4.  **Render**: [`report::ReportFormatter`] turns results into plain text.
//!
//! ## Quick Start
//!
//! ```rust
//! use krakpot::prelude::*;
//!
//! let index = RecipeIndex::builder()
//!     .with_recipe(Recipe::new("Potion").with_ingredient("Medicinal Herb", 2))
//!     .with_recipe(
//!         Recipe::new("Elixir")
//!             .with_ingredient("Potion", 2)
//!             .with_ingredient("Yggdrasil Leaf", 1),
//!     )
//!     .with_locations("Medicinal Herb", ["Angel Falls"])
//!     .build();
//!
//! let tiers = index.equivalence_tiers("elixir", 8, 250);
//! assert_eq!(tiers.len(), 2);
//! assert_eq!(tiers[1].get("Medicinal Herb"), 4);
//! assert_eq!(tiers[1].get("Yggdrasil Leaf"), 1);
//!
//! let trail = index.cascade("Elixir");
//! assert_eq!(trail[0].name, "Elixir");
//! assert_eq!(trail[2].total, 4);
//! ```

pub mod cascade;
pub mod data;
pub mod error;
pub mod index;
pub mod prelude;
pub mod recipe;
pub mod report;
pub mod tiers;
