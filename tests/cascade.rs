//! Tests for the depth-first cascade walker.
mod common;
use common::*;
use krakpot::prelude::*;

fn summary(trail: &[CascadeIngredient]) -> Vec<(&str, u32, u64, usize)> {
    trail
        .iter()
        .map(|e| (e.name.as_str(), e.count, e.total, e.depth))
        .collect()
}

#[test]
fn test_cascade_scales_totals_down_the_tree() {
    let index = create_potion_index();
    let trail = index.cascade("hi-potion");

    // Yggdrasil Leaf never appears: no recipe and no location.
    assert_eq!(
        summary(&trail),
        vec![
            ("Hi-Potion", 1, 1, 0),
            ("Potion", 3, 3, 1),
            ("Medicinal Herb", 2, 6, 2),
            ("Strong Medicine", 1, 1, 1),
            ("Medicinal Herb", 1, 1, 2),
            ("Fresh Water", 1, 1, 2),
        ]
    );
}

#[test]
fn test_cascade_records_locations_and_kinds() {
    let index = create_potion_index();
    let trail = index.cascade("Elixir");

    assert_eq!(trail.len(), 3);
    assert_eq!(trail[0].location, "Bloomingdale shop");
    assert_eq!(trail[0].kind.as_deref(), Some("Items"));
    assert_eq!(trail[1].name, "Potion");
    assert_eq!(trail[1].location, "");
    assert_eq!(trail[2].name, "Medicinal Herb");
    assert_eq!(trail[2].location, "Angel Falls, Stornway");
    assert_eq!(trail[2].kind, None);
    assert_eq!(trail[2].total, 4);
}

#[test]
fn test_direct_children_total_equals_declared_quantity() {
    let index = create_potion_index();
    let trail = index.cascade("Hi-Potion");
    for entry in trail.iter().filter(|e| e.depth == 1) {
        assert_eq!(entry.total, u64::from(entry.count));
    }
}

#[test]
fn test_cascade_stops_on_direct_self_reference() {
    let index = create_cyclic_index();
    let trail = index.cascade("Ouroboros");

    assert_eq!(
        summary(&trail),
        vec![("Ouroboros", 1, 1, 0), ("Ouroboros", 1, 1, 1), ("Scale", 2, 2, 1)]
    );
    let repeated = &trail[1];
    assert_eq!(repeated.location, "");
    assert_eq!(repeated.kind, None);
}

#[test]
fn test_cascade_stops_on_indirect_cycle() {
    let index = create_cyclic_index();
    let trail = index.cascade("chicken");

    assert_eq!(
        summary(&trail),
        vec![("Chicken", 1, 1, 0), ("Egg", 1, 1, 1), ("Chicken", 1, 1, 2)]
    );
}

#[test]
fn test_cycle_guard_compares_canonical_names() {
    let index = RecipeIndex::builder()
        .with_recipe(Recipe::new("Slime").with_ingredient(" SLIME ", 2))
        .build();
    let trail = index.cascade("slime");

    assert_eq!(trail.len(), 2);
    assert_eq!(trail[1].name, " SLIME ");
    assert_eq!(trail[1].total, 2);
    assert_eq!(trail[1].kind, None);
}

#[test]
fn test_zero_quantity_slots_are_walked_with_zero_totals() {
    let index = RecipeIndex::builder()
        .with_recipe(
            Recipe::new("Odd Mix")
                .with_ingredient("Potion", 0)
                .with_ingredient("Rock", 1),
        )
        .with_recipe(Recipe::new("Potion").with_ingredient("Herb", 2))
        .with_locations("Herb", ["Field"])
        .with_locations("Rock", ["Cave"])
        .build();

    assert_eq!(
        summary(&index.cascade("Odd Mix")),
        vec![
            ("Odd Mix", 1, 1, 0),
            ("Potion", 0, 0, 1),
            ("Herb", 2, 0, 2),
            ("Rock", 1, 1, 1),
        ]
    );
}

#[test]
fn test_walker_can_be_reused() {
    let index = create_potion_index();
    let walker = CascadeWalker::new(&index);
    assert_eq!(walker.walk("Potion"), walker.walk("potion"));
    assert!(walker.walk("Nothing").is_empty());
}
