//! Deterministic item state and placement engine.
//!
//! `item-core` tracks where every item instance lives (the shared stash, a
//! map tile, or a unit's equipment) and moves items between those places.
//! Item types come from a read-only [`ItemOracle`]; all mutable state sits
//! behind the host traits in [`host`] and is reached through an
//! [`ItemContext`]. The crate never performs I/O.
pub mod config;
pub mod env;
pub mod error;
pub mod host;
pub mod inventory;
pub mod state;

pub use config::ItemRules;
pub use env::{CombatModifiers, ItemCatalog, ItemOracle, ItemRegistry, ItemType, OracleError};
pub use error::{ErrorSeverity, GameError};
pub use host::{
    EventBus, MapDecor, Record, StatEngine, StoreError, TextOracle, TileTrigger, Value,
    VariableStore,
};
pub use inventory::{Census, Equipment, Ground, InventoryError, ItemContext, Storage};
pub use state::{
    Category, DerivedStats, EquippedItem, GroundEntry, ItemNumber, Modification,
    ModificationKind, ObjectModification, Position, StorageEntry, TraitModification, Unit,
};
