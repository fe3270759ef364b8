use serde::Serialize;
use tracing::warn;

/// Maximum number of ingredient slots a recipe can declare.
pub const MAX_INGREDIENT_SLOTS: usize = 3;

/// Normalizes an item name into the key used for every index lookup.
pub fn canonical_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// One `(ingredient, quantity)` pair of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IngredientSlot {
    pub name: String,
    pub quantity: u32,
}

impl IngredientSlot {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// A crafting recipe for a single item.
///
/// `name` keeps the spelling from the dataset; lookups go through
/// [`canonical_key`]. Slots with an empty ingredient name are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub name: String,
    pub kind: String,
    pub notes: String,
    pub image: Option<String>,
    pub alchemiracle: bool,
    pub ingredients: Vec<IngredientSlot>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        let image = image.into();
        self.image = (!image.is_empty()).then_some(image);
        self
    }

    pub fn with_alchemiracle(mut self, alchemiracle: bool) -> Self {
        self.alchemiracle = alchemiracle;
        self
    }

    /// Appends an ingredient slot. Empty names are skipped, as are slots past
    /// [`MAX_INGREDIENT_SLOTS`].
    pub fn with_ingredient(mut self, name: impl Into<String>, quantity: u32) -> Self {
        let name = name.into();
        if name.is_empty() {
            return self;
        }
        if self.ingredients.len() >= MAX_INGREDIENT_SLOTS {
            warn!(
                recipe = %self.name,
                ingredient = %name,
                "Recipe already has {} ingredient slots, ignoring extra ingredient",
                MAX_INGREDIENT_SLOTS
            );
            return self;
        }
        self.ingredients.push(IngredientSlot::new(name, quantity));
        self
    }

    pub fn key(&self) -> String {
        canonical_key(&self.name)
    }
}
