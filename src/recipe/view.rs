use super::definition::Recipe;
use serde::Serialize;

/// A read-only view combining a [`Recipe`] with the item's acquisition
/// locations. Built on demand by [`crate::index::RecipeIndex::get_recipe`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeRecipe {
    pub name: String,
    pub kind: String,
    pub notes: String,
    pub image: Option<String>,
    pub alchemiracle: bool,
    pub locations: Vec<String>,
}

impl CascadeRecipe {
    pub fn new(recipe: &Recipe, locations: &[String]) -> Self {
        Self {
            name: recipe.name.clone(),
            kind: recipe.kind.clone(),
            notes: recipe.notes.clone(),
            image: recipe.image.clone(),
            alchemiracle: recipe.alchemiracle,
            locations: locations.to_vec(),
        }
    }
}
