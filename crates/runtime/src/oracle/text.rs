//! [`item_core::TextOracle`] backed by an in-memory map.

use std::collections::BTreeMap;

use item_core::TextOracle;
use item_core::inventory::special;

/// Text table keyed by message id. Unknown keys render as the key itself.
#[derive(Clone, Debug, Default)]
pub struct TextTable {
    entries: BTreeMap<String, String>,
}

impl TextTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// English strings for every key the item engine looks up.
    pub fn english() -> Self {
        let mut table = Self::new();
        table.insert(special::FEARLESS_NAME_KEY, "fearless");
        table.insert(
            special::FEARLESS_DESCRIPTION_KEY,
            "Fights on without fear, even when the odds turn against it.",
        );
        table
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }
}

impl TextOracle for TextTable {
    fn text(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(text) => text.clone(),
            None => {
                tracing::warn!(key, "missing text entry");
                key.to_owned()
            }
        }
    }
}
