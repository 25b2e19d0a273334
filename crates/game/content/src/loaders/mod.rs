//! Content loaders for reading item data from files.
//!
//! Each loader turns one RON/TOML file into item-core types.

pub mod factory;
pub mod item;
pub mod rules;

pub use factory::ContentFactory;
pub use item::{ItemCatalogFile, ItemLoader};
pub use rules::RulesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
