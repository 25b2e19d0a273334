//! Shared stash of items not attached to any unit or tile.

use std::collections::BTreeMap;

use super::{Result, special};
use crate::config::ItemRules;
use crate::env::ItemOracle;
use crate::host::{StoreError, VariableStore};
use crate::state::{Category, ItemNumber, StorageEntry};

/// Stash view over the variable store.
///
/// The stash is one store array of [`StorageEntry`] records, kept sorted by
/// item number after every mutation. Duplicates are allowed: each entry is one
/// physical item.
pub struct Storage<'c> {
    items: &'c dyn ItemOracle,
    rules: &'c ItemRules,
    store: &'c mut dyn VariableStore,
}

impl<'c> Storage<'c> {
    pub fn new(
        items: &'c dyn ItemOracle,
        rules: &'c ItemRules,
        store: &'c mut dyn VariableStore,
    ) -> Self {
        Self {
            items,
            rules,
            store,
        }
    }

    /// Decoded stash contents, in stored (number-ascending) order.
    pub fn entries(&self) -> std::result::Result<Vec<StorageEntry>, StoreError> {
        decode(&*self.store, self.rules)
    }

    fn save(&mut self, mut entries: Vec<StorageEntry>) {
        entries.sort_by_key(|entry| entry.number);
        let records = entries.iter().map(StorageEntry::to_record).collect();
        self.store.set_array(&self.rules.storage_variable, records);
    }

    /// Puts one item into the stash.
    ///
    /// The entry's category is the override when given for a crafted template,
    /// otherwise the catalog category of the type. Overrides on regular types
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Fails for unknown item numbers, even when an override is supplied.
    pub fn add(&mut self, number: ItemNumber, category: Option<&Category>) -> Result<()> {
        let item = self.items.get(number)?;
        let category = match category {
            Some(category) if special::is_crafted_template(&item.category) => category.clone(),
            _ => item.category.clone(),
        };

        let mut entries = self.entries()?;
        tracing::debug!(%number, %category, "storage add");
        entries.push(StorageEntry::new(number, category));
        self.save(entries);
        Ok(())
    }

    /// Removes at most one matching entry (the first in stored order).
    ///
    /// Returns the removed entry; a missing entry is not an error.
    pub fn remove(
        &mut self,
        number: ItemNumber,
        category: Option<&Category>,
    ) -> Result<Option<StorageEntry>> {
        let mut entries = self.entries()?;
        let Some(index) = entries.iter().position(|e| e.matches(number, category)) else {
            tracing::debug!(%number, "storage remove: no matching entry");
            return Ok(None);
        };

        let removed = entries.remove(index);
        tracing::debug!(%number, category = %removed.category, "storage remove");
        self.save(entries);
        Ok(Some(removed))
    }

    /// Counts per item number, optionally restricted to one category.
    pub fn list_items(
        &self,
        category: Option<&Category>,
    ) -> std::result::Result<BTreeMap<ItemNumber, u32>, StoreError> {
        let mut counts = BTreeMap::new();
        for entry in self.entries()? {
            if category.is_none_or(|wanted| *wanted == entry.category) {
                *counts.entry(entry.number).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    /// Counts per category, ignoring item identity.
    pub fn list_categories(&self) -> std::result::Result<BTreeMap<Category, u32>, StoreError> {
        let mut counts = BTreeMap::new();
        for entry in self.entries()? {
            *counts.entry(entry.category).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Number of entries matching `number` (and `category` when given).
    pub fn count(
        &self,
        number: ItemNumber,
        category: Option<&Category>,
    ) -> std::result::Result<usize, StoreError> {
        Ok(self
            .entries()?
            .iter()
            .filter(|e| e.matches(number, category))
            .count())
    }
}

/// Decodes the stash array without building a view.
pub(crate) fn decode(
    store: &dyn VariableStore,
    rules: &ItemRules,
) -> std::result::Result<Vec<StorageEntry>, StoreError> {
    let array = &rules.storage_variable;
    store
        .array(array)
        .iter()
        .map(|record| StorageEntry::from_record(record, array))
        .collect()
}
