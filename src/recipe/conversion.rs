use super::definition::Recipe;
use crate::data::RecipeRecord;

impl Recipe {
    /// Converts a raw table row into a `Recipe`.
    ///
    /// Returns `None` when the row has no `result`, since such rows cannot be
    /// looked up by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use krakpot::data::RecipeRecord;
    /// use krakpot::recipe::Recipe;
    ///
    /// let record = RecipeRecord {
    ///     result: "Potion".to_string(),
    ///     item1: "Medicinal Herb".to_string(),
    ///     qty1: 2,
    ///     ..Default::default()
    /// };
    /// let recipe = Recipe::from_record(&record).unwrap();
    /// assert_eq!(recipe.ingredients.len(), 1);
    /// assert_eq!(recipe.ingredients[0].quantity, 2);
    /// ```
    pub fn from_record(record: &RecipeRecord) -> Option<Recipe> {
        if record.result.trim().is_empty() {
            return None;
        }

        let header = Recipe::new(record.result.as_str())
            .with_kind(record.kind.as_str())
            .with_notes(record.notes.as_str())
            .with_image(record.image.as_str())
            .with_alchemiracle(record.alchemiracle);

        Some(
            record
                .slots()
                .into_iter()
                .fold(header, |recipe, (item, qty)| recipe.with_ingredient(item, qty)),
        )
    }
}
