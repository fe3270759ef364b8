use crate::cascade::CascadeIngredient;
use crate::index::RecipeIndex;
use crate::recipe::CascadeRecipe;
use crate::tiers::Tier;
use itertools::Itertools;

/// Formats lookup results into plain-text blocks.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Header block: name (starred for alchemiracle recipes), type and notes.
    pub fn format_header(recipe: &CascadeRecipe) -> String {
        let mut lines = Vec::new();
        if recipe.alchemiracle {
            lines.push(format!("* {} *", recipe.name));
        } else {
            lines.push(recipe.name.clone());
        }
        if !recipe.kind.is_empty() {
            lines.push(format!("Type: {}", recipe.kind));
        }
        if !recipe.notes.is_empty() {
            lines.push(format!("Notes: {}", recipe.notes));
        }
        lines.join("\n")
    }

    /// Direct ingredients of `name`, tagging craftable ones and listing known
    /// locations indented under each ingredient.
    pub fn format_direct(index: &RecipeIndex, name: &str) -> String {
        let mut lines = Vec::new();
        for slot in index.direct_ingredients(name) {
            let tag = if index.has_recipe(&slot.name) {
                " (craftable)"
            } else {
                ""
            };
            lines.push(format!("- {} x{}{}", slot.name, slot.quantity, tag));

            let locations = index
                .get_locations(&slot.name)
                .iter()
                .filter(|l| !l.is_empty())
                .join(", ");
            if !locations.is_empty() {
                lines.push(format!("  - {}", locations));
            }
        }
        lines.join("\n")
    }

    /// The cascade trail, one line per entry, indented two spaces per level.
    pub fn format_cascade(trail: &[CascadeIngredient]) -> String {
        trail
            .iter()
            .map(|entry| {
                let mut line = format!(
                    "{}- {} x{} (total {})",
                    "  ".repeat(entry.depth),
                    entry.name,
                    entry.count,
                    entry.total
                );
                if let Some(kind) = entry.kind.as_deref().filter(|k| !k.is_empty()) {
                    line.push_str(&format!(" [{}]", kind));
                }
                if !entry.location.is_empty() {
                    line.push_str(&format!(" @ {}", entry.location));
                }
                line
            })
            .join("\n")
    }

    /// Heading used for the tier at position `index`.
    pub fn tier_heading(index: usize) -> String {
        match index {
            0 => "Tier 0 (direct)".to_string(),
            1 => "Tier 1 (expanded 1 step)".to_string(),
            n => format!("Tier {} (expanded {} steps)", n, n),
        }
    }

    /// Every non-empty tier under its heading, entries sorted by name.
    pub fn format_tiers(tiers: &[Tier]) -> String {
        tiers
            .iter()
            .enumerate()
            .filter(|(_, tier)| !tier.is_empty())
            .map(|(i, tier)| {
                let entries = tier
                    .sorted_entries()
                    .into_iter()
                    .map(|(name, total)| format!("- {} x{}", name, total))
                    .join("\n");
                format!("{}\n{}", Self::tier_heading(i), entries)
            })
            .join("\n\n")
    }
}
