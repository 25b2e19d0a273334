//! Content factory for building the item registry from data files.

use std::path::{Path, PathBuf};

use item_core::{ItemRegistry, ItemRules, ItemType};

use crate::loaders::{ItemLoader, LoadResult, RulesLoader};

/// Content factory that loads all item content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── items.ron
/// └── rules.toml   (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemType>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load engine rules from `rules.toml`, falling back to the defaults when
    /// the file is absent.
    pub fn load_rules(&self) -> LoadResult<ItemRules> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no rules file; using defaults");
            return Ok(ItemRules::default());
        }
        RulesLoader::load(&path)
    }

    /// Loads the catalog and wraps it in a registry. The registry cache is
    /// built on first lookup.
    pub fn build_registry(&self) -> LoadResult<ItemRegistry> {
        Ok(ItemRegistry::from_items(self.load_items()?))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
