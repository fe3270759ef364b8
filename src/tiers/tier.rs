use crate::recipe::canonical_key;
use ahash::AHashMap;
use itertools::Itertools;
use serde::Serialize;

/// A multiset of ingredient totals.
///
/// Keys are ingredient names as spelled in the dataset. Entries with a
/// quantity of zero are never stored, so two tiers compare equal exactly when
/// they hold the same positive totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tier {
    counts: AHashMap<String, u64>,
}

impl Tier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `name`. Adding zero is a no-op.
    pub fn add(&mut self, name: &str, quantity: u64) {
        if quantity == 0 {
            return;
        }
        match self.counts.get_mut(name) {
            Some(total) => *total = total.saturating_add(quantity),
            None => {
                self.counts.insert(name.to_string(), quantity);
            }
        }
    }

    pub fn get(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    /// Entries sorted by canonical name for display. Names that only differ
    /// in case or padding are ordered by their raw spelling.
    pub fn sorted_entries(&self) -> Vec<(String, u64)> {
        self.counts
            .iter()
            .map(|(name, qty)| (canonical_key(name), name, *qty))
            .sorted_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
            .map(|(_, name, qty)| (name.clone(), qty))
            .collect()
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for Tier {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut tier = Tier::new();
        for (name, qty) in iter {
            tier.add(name.as_ref(), qty);
        }
        tier
    }
}
