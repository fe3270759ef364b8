use crate::index::RecipeIndex;
use crate::recipe::canonical_key;
use ahash::AHashSet;
use tracing::trace;

mod tier;

pub use tier::Tier;

/// Bounds for [`TierExpander`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionLimits {
    /// Maximum number of substitution passes after tier 0.
    pub max_depth: usize,
    /// Maximum quantity of one ingredient substituted per pass. The rest is
    /// carried into the next tier unexpanded.
    pub max_expand_per_item: u64,
}

impl Default for ExpansionLimits {
    fn default() -> Self {
        Self {
            max_depth: 8,
            max_expand_per_item: 250,
        }
    }
}

/// Computes equivalence tiers: tier 0 is the direct ingredient multiset of a
/// recipe, and each following tier replaces every craftable entry of the
/// previous one with its own ingredients.
pub struct TierExpander<'a> {
    index: &'a RecipeIndex,
    limits: ExpansionLimits,
}

pub struct TierExpanderBuilder<'a> {
    index: &'a RecipeIndex,
    limits: ExpansionLimits,
}

impl<'a> TierExpanderBuilder<'a> {
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.limits.max_depth = max_depth;
        self
    }

    pub fn max_expand_per_item(mut self, max_expand_per_item: u64) -> Self {
        self.limits.max_expand_per_item = max_expand_per_item;
        self
    }

    pub fn build(self) -> TierExpander<'a> {
        TierExpander::with_limits(self.index, self.limits)
    }
}

impl<'a> TierExpander<'a> {
    pub fn new(index: &'a RecipeIndex) -> Self {
        Self::with_limits(index, ExpansionLimits::default())
    }

    pub fn with_limits(index: &'a RecipeIndex, limits: ExpansionLimits) -> Self {
        Self { index, limits }
    }

    pub fn builder(index: &'a RecipeIndex) -> TierExpanderBuilder<'a> {
        TierExpanderBuilder {
            index,
            limits: ExpansionLimits::default(),
        }
    }

    pub fn limits(&self) -> ExpansionLimits {
        self.limits
    }

    /// Returns the tiers of `root`, or nothing if `root` has no recipe.
    ///
    /// Expansion stops once no entry of the last tier is craftable, once a
    /// pass leaves the tier unchanged, or after `max_depth` passes, whichever
    /// comes first.
    pub fn expand(&self, root: &str) -> Vec<Tier> {
        if !self.index.has_recipe(root) {
            return Vec::new();
        }

        let first: Tier = self
            .index
            .direct_ingredients(root)
            .iter()
            .map(|slot| (slot.name.as_str(), u64::from(slot.quantity)))
            .collect();

        let mut tiers = vec![first];
        let mut guard = AHashSet::new();

        for pass in 0..self.limits.max_depth {
            let Some(prev) = tiers.last() else {
                break;
            };
            if !prev.iter().any(|(name, _)| self.index.has_recipe(name)) {
                break;
            }

            let next = self.substitute(prev, &mut guard);
            if next == *prev {
                trace!(root, pass, "Tier reached a fixed point");
                break;
            }
            trace!(root, pass, entries = next.len(), "Expanded tier");
            tiers.push(next);
        }

        tiers
    }

    /// One substitution pass over `tier`.
    ///
    /// `guard` holds the canonical names being expanded during this pass;
    /// an entry found in it is copied through instead of expanding itself.
    fn substitute(&self, tier: &Tier, guard: &mut AHashSet<String>) -> Tier {
        let mut out = Tier::new();

        for (name, qty) in tier.iter() {
            if qty == 0 {
                continue;
            }

            let Some(recipe) = self.index.recipe(name) else {
                out.add(name, qty);
                continue;
            };

            let key = canonical_key(name);
            if guard.contains(&key) {
                trace!(name, "Item is already being expanded, passing through");
                out.add(name, qty);
                continue;
            }

            let expand_qty = qty.min(self.limits.max_expand_per_item);
            out.add(name, qty - expand_qty);

            guard.insert(key.clone());
            for slot in &recipe.ingredients {
                out.add(&slot.name, expand_qty.saturating_mul(u64::from(slot.quantity)));
            }
            guard.remove(&key);
        }

        out
    }
}
