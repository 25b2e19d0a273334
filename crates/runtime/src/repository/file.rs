//! JSON save files for the variable store.

use std::fs;
use std::path::{Path, PathBuf};

use super::{MemoryVariableStore, Result};

/// Save file holding one [`MemoryVariableStore`] as pretty-printed JSON.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash never leaves a half-written save.
#[derive(Clone, Debug)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn save(&self, store: &MemoryVariableStore) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(store)?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved variable store to {}", self.path.display());
        Ok(())
    }

    /// Loads the store, or `None` when the file does not exist yet.
    pub fn load(&self) -> Result<Option<MemoryVariableStore>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path)?;
        let store: MemoryVariableStore = serde_json::from_slice(&bytes)?;

        tracing::debug!("Loaded variable store from {}", self.path.display());
        Ok(Some(store))
    }
}
