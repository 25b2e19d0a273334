//! Whole-world item counts.

use std::collections::BTreeMap;

use super::{ItemContext, Result, ground, storage};
use crate::state::{Category, ItemNumber, Unit};

/// Count of every `(number, category)` pair across stash, ground and units.
///
/// Orchestrated transfers never change a census; comparing two of them is how
/// conservation is checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Census {
    counts: BTreeMap<(ItemNumber, Category), usize>,
}

impl Census {
    fn record(&mut self, number: ItemNumber, category: Category) {
        *self.counts.entry((number, category)).or_insert(0) += 1;
    }

    pub fn count(&self, number: ItemNumber, category: &Category) -> usize {
        self.counts
            .get(&(number, category.clone()))
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(ItemNumber, Category), &usize)> {
        self.counts.iter()
    }
}

impl ItemContext<'_> {
    /// Counts items in the stash, on every tile and on the given units.
    ///
    /// Ground entries without an override count under their catalog category.
    pub fn census<'u>(&self, units: impl IntoIterator<Item = &'u Unit>) -> Result<Census> {
        let mut census = Census::default();

        for entry in storage::decode(&*self.store, self.rules)? {
            census.record(entry.number, entry.category);
        }
        for entry in ground::decode(&*self.store, self.rules)? {
            let category = match entry.category {
                Some(category) => category,
                None => self.items.get(entry.number)?.category.clone(),
            };
            census.record(entry.number, category);
        }
        for unit in units {
            for item in unit.items() {
                census.record(item.number, item.category.clone());
            }
        }

        tracing::debug!(total = census.total(), "census");
        Ok(census)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::testing::Harness;
    use crate::state::Position;

    #[test]
    fn counts_every_location() {
        let mut h = Harness::new();
        let mut hero = Unit::new("hero", Position::new(1, 1));
        let boots = Category::from("boots");
        {
            let mut ctx = h.context();
            ctx.storage().add(ItemNumber(100), None).unwrap();
            ctx.ground().add(ItemNumber(100), Position::new(2, 2), None).unwrap();
            ctx.ground()
                .add(ItemNumber(300), Position::new(2, 2), Some(&boots))
                .unwrap();
            ctx.equipment().add(&mut hero, ItemNumber(7), None).unwrap();
        }

        let census = h.context().census([&hero]).unwrap();

        assert_eq!(census.count(ItemNumber(100), &"sword".into()), 2);
        assert_eq!(census.count(ItemNumber(300), &boots), 1);
        assert_eq!(census.count(ItemNumber(7), &"helm".into()), 1);
        assert_eq!(census.total(), 4);
    }

    #[test]
    fn empty_world_has_empty_census() {
        let mut h = Harness::new();
        let census = h.context().census(std::iter::empty()).unwrap();
        assert_eq!(census, Census::default());
        assert_eq!(census.iter().count(), 0);
    }
}
