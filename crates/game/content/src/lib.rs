//! Data-driven item content and loaders.
//!
//! This crate reads the static data the item engine runs on:
//! - Item catalog (data-driven via RON)
//! - Engine rules: store variable names, event names, markup (via TOML)
//!
//! Content feeds the [`item_core::ItemRegistry`] and never appears in the
//! persisted item state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, ItemCatalogFile, ItemLoader, LoadResult, RulesLoader};
