//! Item placement engine.
//!
//! An item instance lives in exactly one of three places: the shared stash
//! ([`Storage`]), a map tile ([`Ground`]) or a unit's modification list
//! ([`Equipment`]). Each view owns its slice of that state; only the
//! transfers on [`ItemContext`] move an item between two places, always
//! taking it out of the source before putting it into the destination.
//!
//! # Usage
//!
//! ```ignore
//! let mut ctx = ItemContext::new(&registry, &rules, &mut store, &mut stats,
//!     &mut events, &mut decor, &text);
//! ctx.storage().add(ItemNumber(100), None)?;
//! ctx.get_item_from_storage(&hero, ItemNumber(100), None)?;
//! ```
mod census;
mod equipment;
mod error;
mod ground;
pub mod special;
mod storage;
mod transfer;

#[cfg(test)]
pub(crate) mod testing;

pub use census::Census;
pub use equipment::Equipment;
pub use error::{InventoryError, Result};
pub use ground::Ground;
pub use storage::Storage;

use crate::config::ItemRules;
use crate::env::ItemOracle;
use crate::host::{EventBus, MapDecor, StatEngine, TextOracle, VariableStore};

/// Bundle of every collaborator the engine needs for one call.
///
/// The context borrows; it holds no state of its own. Build one per event
/// callback and drop it afterwards.
pub struct ItemContext<'a> {
    items: &'a dyn ItemOracle,
    rules: &'a ItemRules,
    store: &'a mut dyn VariableStore,
    stats: &'a mut dyn StatEngine,
    events: &'a mut dyn EventBus,
    decor: &'a mut dyn MapDecor,
    text: &'a dyn TextOracle,
}

impl<'a> ItemContext<'a> {
    pub fn new(
        items: &'a dyn ItemOracle,
        rules: &'a ItemRules,
        store: &'a mut dyn VariableStore,
        stats: &'a mut dyn StatEngine,
        events: &'a mut dyn EventBus,
        decor: &'a mut dyn MapDecor,
        text: &'a dyn TextOracle,
    ) -> Self {
        Self {
            items,
            rules,
            store,
            stats,
            events,
            decor,
            text,
        }
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }

    pub fn rules(&self) -> &'a ItemRules {
        self.rules
    }

    /// Stash view.
    pub fn storage(&mut self) -> Storage<'_> {
        Storage::new(self.items, self.rules, &mut *self.store)
    }

    /// Ground view.
    pub fn ground(&mut self) -> Ground<'_> {
        Ground::new(
            self.items,
            self.rules,
            &mut *self.store,
            &mut *self.events,
            &mut *self.decor,
        )
    }

    /// Equipment view.
    pub fn equipment(&mut self) -> Equipment<'_> {
        Equipment::new(self.items, self.rules, &mut *self.stats, self.text)
    }
}
