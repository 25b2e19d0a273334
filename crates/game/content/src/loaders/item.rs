//! Item catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use item_core::ItemType;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemType>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed, or when two definitions
    /// share an item number.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemType>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemType>> {
        let catalog: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for item in &catalog.items {
            if !seen.insert(item.number) {
                anyhow::bail!("duplicate item number {} in catalog", item.number);
            }
        }

        tracing::debug!(count = catalog.items.len(), "loaded item catalog");
        Ok(catalog.items)
    }
}
