use crate::cascade::{CascadeIngredient, CascadeWalker};
use crate::data::Dataset;
use crate::recipe::{CascadeRecipe, IngredientSlot, Recipe, canonical_key};
use crate::tiers::{ExpansionLimits, Tier, TierExpander};
use ahash::AHashMap;
use itertools::Itertools;
use tracing::debug;

/// Immutable lookup tables for recipes and item locations.
///
/// Both maps are keyed by [`canonical_key`], so every lookup is
/// case-insensitive and ignores surrounding whitespace. The index is built
/// once and only ever read afterwards, so it can be shared freely between
/// callers (`&RecipeIndex` or `Arc<RecipeIndex>`).
#[derive(Debug, Clone, Default)]
pub struct RecipeIndex {
    recipes: AHashMap<String, Recipe>,
    locations: AHashMap<String, Vec<String>>,
}

/// Collects recipes and locations before freezing them into a [`RecipeIndex`].
///
/// Later entries replace earlier ones with the same canonical name, so the
/// insertion order decides duplicates.
#[derive(Debug, Default)]
pub struct RecipeIndexBuilder {
    recipes: AHashMap<String, Recipe>,
    locations: AHashMap<String, Vec<String>>,
}

impl RecipeIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.insert_recipe(recipe);
        self
    }

    pub fn with_locations<I, S>(mut self, name: &str, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_locations(name, locations.into_iter().map(Into::into).collect());
        self
    }

    fn insert_recipe(&mut self, recipe: Recipe) {
        let key = recipe.key();
        if key.is_empty() {
            return;
        }
        if let Some(previous) = self.recipes.insert(key, recipe) {
            debug!(name = %previous.name, "Duplicate recipe name, keeping the later entry");
        }
    }

    fn insert_locations(&mut self, name: &str, locations: Vec<String>) {
        let key = canonical_key(name);
        if key.is_empty() {
            return;
        }
        if self.locations.insert(key, locations).is_some() {
            debug!(name, "Duplicate location entry, keeping the later entry");
        }
    }

    pub fn build(self) -> RecipeIndex {
        debug!(
            recipes = self.recipes.len(),
            locations = self.locations.len(),
            "Built recipe index"
        );
        RecipeIndex {
            recipes: self.recipes,
            locations: self.locations,
        }
    }
}

impl RecipeIndex {
    pub fn builder() -> RecipeIndexBuilder {
        RecipeIndexBuilder::new()
    }

    /// Builds the index from both raw tables, skipping rows without a `result`.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut builder = RecipeIndexBuilder::new();
        for recipe in dataset.recipes.iter().filter_map(Recipe::from_record) {
            builder.insert_recipe(recipe);
        }
        for record in &dataset.locations {
            builder.insert_locations(&record.result, record.location.clone());
        }
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn has_recipe(&self, name: &str) -> bool {
        self.recipes.contains_key(&canonical_key(name))
    }

    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.get(&canonical_key(name))
    }

    /// Returns the recipe for `name` together with its locations.
    pub fn get_recipe(&self, name: &str) -> Option<CascadeRecipe> {
        let recipe = self.recipe(name)?;
        Some(CascadeRecipe::new(recipe, self.get_locations(&recipe.name)))
    }

    /// Locations for `name`, whether or not the item has a recipe.
    pub fn get_locations(&self, name: &str) -> &[String] {
        self.locations
            .get(&canonical_key(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The immediate ingredients of `name` in slot order.
    ///
    /// Empty when the item has no recipe. Slots with a quantity of `0` are
    /// still listed.
    pub fn direct_ingredients(&self, name: &str) -> &[IngredientSlot] {
        self.recipe(name)
            .map(|r| r.ingredients.as_slice())
            .unwrap_or(&[])
    }

    /// Recipe names containing `fragment` (case-insensitive), sorted by
    /// canonical name.
    pub fn search(&self, fragment: &str) -> Vec<&str> {
        let needle = canonical_key(fragment);
        self.recipes
            .iter()
            .filter(|(key, _)| key.contains(&needle))
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, recipe)| recipe.name.as_str())
            .collect()
    }

    /// See [`CascadeWalker::walk`].
    pub fn cascade(&self, root: &str) -> Vec<CascadeIngredient> {
        CascadeWalker::new(self).walk(root)
    }

    /// See [`TierExpander::expand`].
    pub fn equivalence_tiers(
        &self,
        root: &str,
        max_depth: usize,
        max_expand_per_item: u64,
    ) -> Vec<Tier> {
        TierExpander::with_limits(
            self,
            ExpansionLimits {
                max_depth,
                max_expand_per_item,
            },
        )
        .expand(root)
    }
}
