//! Item state representation.
//!
//! This module owns the value types that describe where item instances live:
//! stash entries, ground entries and the modifications attached to units.
//! The engine in [`crate::inventory`] persists stash and ground through the
//! host variable store; units are owned by the caller.
pub mod types;

pub use types::{
    Category, DerivedStats, EquippedItem, GroundEntry, ItemNumber, Modification,
    ModificationKind, ObjectModification, Position, StorageEntry, TraitModification, Unit,
};
