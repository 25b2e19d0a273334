//! Contracts for the mutable host collaborators.
//!
//! Where [`crate::env`] exposes read-only data, the traits here describe the
//! parts of the host game the item engine writes to: the persistent variable
//! store, the stat engine, the event/trigger system, the map decor layer and
//! the text table. The engine holds no state of its own between calls; all of
//! it lives behind these traits.
mod error;
mod record;
mod trigger;

pub use error::StoreError;
pub use record::{Record, Value};
pub use trigger::TileTrigger;

use crate::state::{Position, Unit};

/// Persistent, globally addressable variable store.
pub trait VariableStore {
    /// Reads a scalar variable.
    fn variable(&self, name: &str) -> Option<Value>;

    /// Writes a scalar variable. `None` clears it.
    fn set_variable(&mut self, name: &str, value: Option<Value>);

    /// Reads an array variable. An absent array reads as empty.
    fn array(&self, name: &str) -> Vec<Record>;

    /// Replaces an array variable. An empty vector clears it.
    fn set_array(&mut self, name: &str, records: Vec<Record>);
}

/// Derived-stat engine of the host.
pub trait StatEngine {
    /// Recalculates derived combat statistics from the unit's full
    /// modification set.
    fn recompute(&mut self, unit: &mut Unit);

    /// Re-registers the unit at its map position.
    fn commit(&mut self, unit: &Unit);
}

/// Event and trigger system of the host.
pub trait EventBus {
    /// Fires a named event at a tile.
    fn fire(&mut self, event: &str, position: Position);

    /// Registers a tile-entry trigger. Returns `false` when a trigger with the
    /// same id is already registered (the call is then a no-op).
    fn register_trigger(&mut self, trigger: TileTrigger) -> bool;
}

/// Visual decoration layer of the map.
pub trait MapDecor {
    fn place_image(&mut self, position: Position, image: &str);

    fn clear_image(&mut self, position: Position, image: &str);
}

/// Localized display strings.
pub trait TextOracle {
    /// Returns the display string for `key`.
    fn text(&self, key: &str) -> String;
}
