//! Tests for plain-text report formatting.
mod common;
use common::*;
use krakpot::prelude::*;

#[test]
fn test_format_header() {
    let index = create_potion_index();
    let elixir = index.get_recipe("Elixir").unwrap();
    assert_eq!(
        ReportFormatter::format_header(&elixir),
        "Elixir\nType: Items\nNotes: Restores everything"
    );

    let star = RecipeIndex::builder()
        .with_recipe(Recipe::new("Shiny").with_alchemiracle(true))
        .build()
        .get_recipe("shiny")
        .unwrap();
    assert_eq!(ReportFormatter::format_header(&star), "* Shiny *");
}

#[test]
fn test_format_direct_tags_craftable_and_lists_locations() {
    let index = create_potion_index();
    assert_eq!(
        ReportFormatter::format_direct(&index, "Hi-Potion"),
        "- Potion x3 (craftable)\n- Strong Medicine x1 (craftable)"
    );
    assert_eq!(
        ReportFormatter::format_direct(&index, "Strong Medicine"),
        "- Medicinal Herb x1\n  - Angel Falls, Stornway\n- Fresh Water x1\n  - Coffinwell"
    );
    assert_eq!(ReportFormatter::format_direct(&index, "Unknown"), "");
}

#[test]
fn test_format_cascade_indents_by_depth() {
    let index = create_potion_index();
    let text = ReportFormatter::format_cascade(&index.cascade("Elixir"));
    assert_eq!(
        text,
        "- Elixir x1 (total 1) [Items] @ Bloomingdale shop\n  \
         - Potion x2 (total 2) [Items]\n    \
         - Medicinal Herb x2 (total 4) @ Angel Falls, Stornway"
    );
}

#[test]
fn test_format_tiers_uses_headings_and_sorted_entries() {
    let index = create_potion_index();
    let text = ReportFormatter::format_tiers(&index.equivalence_tiers("Hi-Potion", 8, 250));
    assert_eq!(
        text,
        "Tier 0 (direct)\n- Potion x3\n- Strong Medicine x1\n\n\
         Tier 1 (expanded 1 step)\n- Fresh Water x1\n- Medicinal Herb x7"
    );
    assert_eq!(ReportFormatter::tier_heading(3), "Tier 3 (expanded 3 steps)");
    assert_eq!(ReportFormatter::format_tiers(&[Tier::new()]), "");
}
