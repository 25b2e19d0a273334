//! Lazily built, read-only item registry.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use super::{ItemCatalog, ItemOracle, ItemType, OracleError};
use crate::state::ItemNumber;

/// Process-lifetime cache over an [`ItemCatalog`].
///
/// The cache is built once, on the first lookup, and never invalidated. A
/// catalog that changes at runtime needs a fresh registry.
///
/// Definitions can be staged with [`ItemRegistry::insert`] until the cache is
/// built; afterwards every write fails with [`OracleError::ImmutableRegistry`].
pub struct ItemRegistry {
    catalog: Box<dyn ItemCatalog>,
    staged: Vec<ItemType>,
    cache: OnceLock<BTreeMap<ItemNumber, ItemType>>,
}

impl ItemRegistry {
    pub fn new(catalog: impl ItemCatalog + 'static) -> Self {
        Self {
            catalog: Box::new(catalog),
            staged: Vec::new(),
            cache: OnceLock::new(),
        }
    }

    /// Registry over a fixed list of definitions.
    pub fn from_items(items: Vec<ItemType>) -> Self {
        Self::new(items)
    }

    /// Stages a definition for the build. Staged definitions win over
    /// catalog entries with the same number.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ImmutableRegistry` once the cache has been built.
    pub fn insert(&mut self, item: ItemType) -> Result<(), OracleError> {
        if self.is_built() {
            tracing::warn!(number = %item.number, "rejected write to built item registry");
            return Err(OracleError::ImmutableRegistry(item.number));
        }
        self.staged.push(item);
        Ok(())
    }

    /// True once the first lookup has built the cache.
    pub fn is_built(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Number of known definitions. Builds the cache.
    pub fn len(&self) -> usize {
        self.cache().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache().is_empty()
    }

    fn cache(&self) -> &BTreeMap<ItemNumber, ItemType> {
        self.cache.get_or_init(|| self.build())
    }

    fn build(&self) -> BTreeMap<ItemNumber, ItemType> {
        let mut definitions = BTreeMap::new();
        for item in self.catalog.items().into_iter().chain(self.staged.iter().cloned()) {
            let number = item.number;
            if definitions.insert(number, item).is_some() {
                tracing::warn!(%number, "duplicate item definition; keeping the later one");
            }
        }
        tracing::debug!(count = definitions.len(), "item registry built");
        definitions
    }
}

impl ItemOracle for ItemRegistry {
    fn definition(&self, number: ItemNumber) -> Option<&ItemType> {
        self.cache().get(&number)
    }

    fn all_definitions(&self) -> Vec<&ItemType> {
        self.cache().values().collect()
    }
}

impl fmt::Debug for ItemRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemRegistry")
            .field("staged", &self.staged.len())
            .field("built", &self.is_built())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingCatalog {
        builds: Arc<AtomicUsize>,
    }

    impl ItemCatalog for CountingCatalog {
        fn items(&self) -> Vec<ItemType> {
            self.builds.fetch_add(1, Ordering::SeqCst);
            vec![
                ItemType::new(ItemNumber(100), "sword", "Sword"),
                ItemType::new(ItemNumber(7), "helm", "Helm"),
            ]
        }
    }

    #[test]
    fn cache_is_built_once_on_first_lookup() {
        let builds = Arc::new(AtomicUsize::new(0));
        let registry = ItemRegistry::new(CountingCatalog {
            builds: Arc::clone(&builds),
        });

        assert!(!registry.is_built());
        assert_eq!(builds.load(Ordering::SeqCst), 0);

        assert_eq!(registry.get(ItemNumber(100)).map(|t| t.name.as_str()), Ok("Sword"));
        assert!(registry.get(ItemNumber(7)).is_ok());
        assert!(registry.is_built());
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unknown_number_is_not_found() {
        let registry = ItemRegistry::from_items(vec![]);
        assert_eq!(
            registry.get(ItemNumber(42)),
            Err(OracleError::ItemNotFound(ItemNumber(42)))
        );
    }

    #[test]
    fn writes_after_build_are_rejected() {
        let mut registry = ItemRegistry::from_items(vec![ItemType::new(ItemNumber(1), "ring", "Ring")]);
        registry
            .insert(ItemType::new(ItemNumber(2), "amulet", "Amulet"))
            .expect("staging before build succeeds");

        assert!(registry.get(ItemNumber(2)).is_ok());

        let err = registry
            .insert(ItemType::new(ItemNumber(3), "amulet", "Late"))
            .unwrap_err();
        assert_eq!(err, OracleError::ImmutableRegistry(ItemNumber(3)));
        assert!(registry.definition(ItemNumber(3)).is_none());
    }

    #[test]
    fn definitions_are_listed_in_number_order() {
        let registry = ItemRegistry::from_items(vec![
            ItemType::new(ItemNumber(9), "ring", "B"),
            ItemType::new(ItemNumber(3), "ring", "A"),
        ]);
        let numbers: Vec<_> = registry.all_definitions().iter().map(|t| t.number.0).collect();
        assert_eq!(numbers, vec![3, 9]);
    }
}
