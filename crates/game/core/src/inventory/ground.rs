//! Items lying on map tiles.

use std::collections::BTreeSet;

use super::{Result, special};
use crate::config::ItemRules;
use crate::env::ItemOracle;
use crate::host::{EventBus, MapDecor, StoreError, TileTrigger, VariableStore};
use crate::state::{Category, GroundEntry, ItemNumber, Position};

/// Ground view over the variable store, the decor layer and the trigger
/// system.
///
/// Entries are kept in insertion order. Every tile that receives an item gets
/// its image drawn and a pick-up trigger registered; the trigger id embeds
/// the coordinate, so repeated registrations collapse in the host.
pub struct Ground<'c> {
    items: &'c dyn ItemOracle,
    rules: &'c ItemRules,
    store: &'c mut dyn VariableStore,
    events: &'c mut dyn EventBus,
    decor: &'c mut dyn MapDecor,
}

impl<'c> Ground<'c> {
    pub fn new(
        items: &'c dyn ItemOracle,
        rules: &'c ItemRules,
        store: &'c mut dyn VariableStore,
        events: &'c mut dyn EventBus,
        decor: &'c mut dyn MapDecor,
    ) -> Self {
        Self {
            items,
            rules,
            store,
            events,
            decor,
        }
    }

    /// Every ground entry on the map, in stored order.
    pub fn entries(&self) -> std::result::Result<Vec<GroundEntry>, StoreError> {
        decode(&*self.store, self.rules)
    }

    fn save(&mut self, entries: &[GroundEntry]) {
        let records = entries.iter().map(GroundEntry::to_record).collect();
        self.store.set_array(&self.rules.ground_variable, records);
    }

    /// Drops one item on a tile.
    ///
    /// The category override is kept only for crafted templates. The type image
    /// is drawn once per type and tile, matching the single clear in
    /// [`Ground::remove`].
    pub fn add(
        &mut self,
        number: ItemNumber,
        position: Position,
        category: Option<&Category>,
    ) -> Result<()> {
        let item = self.items.get(number)?;
        let category = category.filter(|_| special::is_crafted_template(&item.category));
        let image = item.image.clone();

        let mut entries = self.entries()?;
        let first_of_type = !entries
            .iter()
            .any(|e| e.position == position && e.number == number);
        entries.push(GroundEntry::new(number, position, category.cloned()));
        self.save(&entries);
        tracing::debug!(%number, %position, "ground add");

        if first_of_type {
            self.decor.place_image(position, &image);
        }
        let trigger = TileTrigger::for_tile(self.rules, position);
        if self.events.register_trigger(trigger) {
            tracing::debug!(%position, "registered pick-up trigger");
        }
        Ok(())
    }

    /// Removes one matching item from a tile.
    ///
    /// Exactly one entry is removed even when several match. The tile image is
    /// cleared only when the removed entry was the last item of its type on
    /// the tile; the image belongs to the type, so entries of the same number
    /// with another category keep it alive.
    ///
    /// Returns the removed entry; a missing entry is not an error.
    pub fn remove(
        &mut self,
        number: ItemNumber,
        position: Position,
        category: Option<&Category>,
    ) -> Result<Option<GroundEntry>> {
        let image = self.items.get(number)?.image.clone();

        let mut entries = self.entries()?;
        let Some(index) = entries
            .iter()
            .rposition(|e| e.position == position && e.matches(number, category))
        else {
            tracing::debug!(%number, %position, "ground remove: no matching entry");
            return Ok(None);
        };

        let same_type = entries
            .iter()
            .filter(|e| e.position == position && e.number == number)
            .count();

        let removed = entries.remove(index);
        self.save(&entries);
        tracing::debug!(%number, %position, remaining = same_type - 1, "ground remove");

        if same_type == 1 {
            self.decor.clear_image(position, &image);
        }
        Ok(Some(removed))
    }

    /// Item numbers lying on a tile, in stored order.
    pub fn list(&self, position: Position) -> std::result::Result<Vec<ItemNumber>, StoreError> {
        Ok(self
            .entries_at(position)?
            .into_iter()
            .map(|e| e.number)
            .collect())
    }

    /// Entries (with category overrides) lying on a tile.
    pub fn entries_at(
        &self,
        position: Position,
    ) -> std::result::Result<Vec<GroundEntry>, StoreError> {
        Ok(self
            .entries()?
            .into_iter()
            .filter(|e| e.position == position)
            .collect())
    }

    /// Tiles carrying at least one item.
    pub fn occupied_tiles(&self) -> std::result::Result<BTreeSet<Position>, StoreError> {
        Ok(self.entries()?.into_iter().map(|e| e.position).collect())
    }
}

/// Decodes the ground array without building a view.
pub(crate) fn decode(
    store: &dyn VariableStore,
    rules: &ItemRules,
) -> std::result::Result<Vec<GroundEntry>, StoreError> {
    let array = &rules.ground_variable;
    store
        .array(array)
        .iter()
        .map(|record| GroundEntry::from_record(record, array))
        .collect()
}
