//! In-memory VariableStore implementation.

use std::collections::BTreeMap;

use item_core::{Record, Value, VariableStore};
use serde::{Deserialize, Serialize};

/// In-memory implementation of [`VariableStore`].
///
/// Scalars and arrays live in separate namespaces. Empty arrays are dropped
/// so a cleared list and a never-written list look the same on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryVariableStore {
    #[serde(default)]
    variables: BTreeMap<String, Value>,
    #[serde(default)]
    arrays: BTreeMap<String, Vec<Record>>,
}

impl MemoryVariableStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of every non-empty array.
    pub fn array_names(&self) -> impl Iterator<Item = &str> {
        self.arrays.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.arrays.is_empty()
    }
}

impl VariableStore for MemoryVariableStore {
    fn variable(&self, name: &str) -> Option<Value> {
        self.variables.get(name).cloned()
    }

    fn set_variable(&mut self, name: &str, value: Option<Value>) {
        match value {
            Some(value) => {
                self.variables.insert(name.to_owned(), value);
            }
            None => {
                self.variables.remove(name);
            }
        }
    }

    fn array(&self, name: &str) -> Vec<Record> {
        self.arrays.get(name).cloned().unwrap_or_default()
    }

    fn set_array(&mut self, name: &str, records: Vec<Record>) {
        if records.is_empty() {
            self.arrays.remove(name);
        } else {
            self.arrays.insert(name.to_owned(), records);
        }
    }
}
