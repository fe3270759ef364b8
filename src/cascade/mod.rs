use crate::index::RecipeIndex;
use crate::recipe::canonical_key;
use serde::Serialize;
use tracing::trace;

/// One line of a cascade trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CascadeIngredient {
    pub name: String,
    /// Quantity declared by the parent recipe (1 for the root).
    pub count: u32,
    /// Units needed to craft exactly one of the root item.
    pub total: u64,
    /// Distance from the root, which sits at depth 0.
    pub depth: usize,
    /// Comma-joined acquisition locations, empty when unknown.
    pub location: String,
    /// Recipe type, present only when this node is itself craftable.
    pub kind: Option<String>,
}

/// Walks the ingredient tree of a recipe depth-first.
pub struct CascadeWalker<'a> {
    index: &'a RecipeIndex,
}

/// Per-walk working state. The trail holds the canonical names of the
/// recipes currently being descended into.
struct WalkState {
    trail: Vec<String>,
    out: Vec<CascadeIngredient>,
}

impl<'a> CascadeWalker<'a> {
    pub fn new(index: &'a RecipeIndex) -> Self {
        Self { index }
    }

    /// Produces the pre-order trail of `root` and everything it is made of.
    ///
    /// Totals multiply down the path, so a leaf's total is the number of that
    /// leaf needed for one root. An item that reappears inside its own
    /// ancestry is recorded once at that position and not expanded again.
    /// Ingredients that have neither a recipe nor a known location are left
    /// out. Returns an empty trail when `root` has no recipe.
    pub fn walk(&self, root: &str) -> Vec<CascadeIngredient> {
        let Some(recipe) = self.index.recipe(root) else {
            return Vec::new();
        };

        let mut state = WalkState {
            trail: Vec::new(),
            out: Vec::new(),
        };
        self.visit(&recipe.name, 1, 1, 0, &mut state);
        debug_assert!(state.trail.is_empty());
        state.out
    }

    fn visit(
        &self,
        name: &str,
        count: u32,
        multiplier: u64,
        depth: usize,
        state: &mut WalkState,
    ) {
        let key = canonical_key(name);
        let total = u64::from(count).saturating_mul(multiplier);

        if state.trail.contains(&key) {
            trace!(name, depth, "Cycle in cascade, not descending");
            state.out.push(CascadeIngredient {
                name: name.to_string(),
                count,
                total,
                depth,
                location: String::new(),
                kind: None,
            });
            return;
        }

        let locations = self.index.get_locations(name);
        let location = locations.join(", ");

        match self.index.recipe(name) {
            Some(recipe) => {
                state.out.push(CascadeIngredient {
                    name: name.to_string(),
                    count,
                    total,
                    depth,
                    location,
                    kind: Some(recipe.kind.clone()),
                });

                state.trail.push(key);
                for slot in &recipe.ingredients {
                    self.visit(&slot.name, slot.quantity, total, depth + 1, state);
                }
                state.trail.pop();
            }
            None if !locations.is_empty() => {
                state.out.push(CascadeIngredient {
                    name: name.to_string(),
                    count,
                    total,
                    depth,
                    location,
                    kind: None,
                });
            }
            None => {}
        }
    }
}
