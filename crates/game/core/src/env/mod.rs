//! Read-only item data.
//!
//! The [`ItemOracle`] trait is how the engine sees the catalog; the
//! [`ItemRegistry`] implements it as a lazily built, immutable cache over an
//! [`ItemCatalog`] source.
mod error;
mod items;
mod registry;

pub use error::OracleError;
pub use items::{CombatModifiers, ItemCatalog, ItemOracle, ItemType};
pub use registry::ItemRegistry;
