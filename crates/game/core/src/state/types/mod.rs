pub mod common;
pub mod item;
pub mod unit;

// Re-export common types
pub use common::{Category, ItemNumber, Position};

// Re-export placement records
pub use item::{GroundEntry, StorageEntry};

// Re-export unit-side types
pub use unit::{
    DerivedStats, EquippedItem, Modification, ModificationKind, ObjectModification,
    TraitModification, Unit,
};
