//! Transfers that move items between stash, ground and units.
//!
//! Every transfer validates its inputs and checks the source before it
//! touches the destination, then removes from the source first. An error
//! therefore never leaves an item duplicated.

use std::collections::BTreeSet;

use super::{InventoryError, ItemContext, Result, ground, special, storage};
use crate::state::{Category, ItemNumber, Unit};

impl ItemContext<'_> {
    /// Moves every regular item of the unit into the stash with a single stat
    /// refresh at the end. Returns how many items were moved.
    pub fn undress_unit(&mut self, unit: &mut Unit) -> Result<usize> {
        let pairs: BTreeSet<(ItemNumber, Category)> = super::Equipment::list_regular(unit)
            .into_iter()
            .map(|item| (item.number, item.category.clone()))
            .collect();

        let mut moved = 0;
        for (number, category) in &pairs {
            moved += self.take_item_from_unit(unit, *number, Some(category), true)?;
        }

        self.equipment().refresh(unit);
        tracing::debug!(unit = %unit.id, moved, "undress");
        Ok(moved)
    }

    /// Unequips matching items and puts them into the stash.
    ///
    /// Every removed copy becomes one stash entry with the category it was
    /// equipped with. Returns how many were moved.
    ///
    /// # Errors
    ///
    /// `NotEquipped` when nothing matches; the stash is untouched.
    pub fn take_item_from_unit(
        &mut self,
        unit: &mut Unit,
        number: ItemNumber,
        category: Option<&Category>,
        skip_stat_update: bool,
    ) -> Result<usize> {
        self.items.get(number)?;
        storage::decode(&*self.store, self.rules)?;

        if !unit.items().any(|item| item.matches(number, category)) {
            tracing::warn!(%number, unit = %unit.id, "take from unit: not equipped");
            return Err(InventoryError::NotEquipped {
                unit: unit.id.clone(),
                number,
                category: category.cloned(),
            });
        }

        let removed = self
            .equipment()
            .remove(unit, number, category, skip_stat_update);
        let mut storage = self.storage();
        for item in &removed {
            storage.add(number, Some(&item.category))?;
        }
        tracing::debug!(%number, unit = %unit.id, moved = removed.len(), "unit -> storage");
        Ok(removed.len())
    }

    /// Takes one item out of the stash, drops it at the unit's tile and fires
    /// the pick-up event there so the unit collects it.
    ///
    /// The pick itself is left to the host: whatever handles the pick-up event
    /// must call [`ItemContext::pick_item_from_ground`]. Until then the item
    /// stays on the ground.
    ///
    /// # Errors
    ///
    /// `NotInStorage` when the stash holds no matching entry.
    pub fn get_item_from_storage(
        &mut self,
        unit: &Unit,
        number: ItemNumber,
        category: Option<&Category>,
    ) -> Result<()> {
        let crafted = special::is_crafted_template(&self.items.get(number)?.category);
        ground::decode(&*self.store, self.rules)?;

        let Some(entry) = self.storage().remove(number, category)? else {
            tracing::warn!(%number, "get from storage: no matching entry");
            return Err(InventoryError::NotInStorage {
                number,
                category: category.cloned(),
            });
        };

        let position = unit.position;
        let ground_category = crafted.then_some(&entry.category);
        self.ground().add(number, position, ground_category)?;
        self.events.fire(&self.rules.pick_event, position);
        tracing::debug!(%number, %position, unit = %unit.id, "storage -> ground");
        Ok(())
    }

    /// Picks one item up from the unit's tile and equips it.
    ///
    /// # Errors
    ///
    /// - `NotOnGround` when the tile holds no matching entry
    /// - `MissingCraftedCategory` when the matching entry is a crafted
    ///   template that was dropped without a category
    pub fn pick_item_from_ground(
        &mut self,
        unit: &mut Unit,
        number: ItemNumber,
        category: Option<&Category>,
    ) -> Result<()> {
        let crafted = special::is_crafted_template(&self.items.get(number)?.category);
        let position = unit.position;

        // Same entry `Ground::remove` picks: the last match on the tile.
        let entries = ground::decode(&*self.store, self.rules)?;
        let Some(entry) = entries
            .iter()
            .rev()
            .find(|e| e.position == position && e.matches(number, category))
        else {
            tracing::warn!(%number, %position, "pick from ground: no matching entry");
            return Err(InventoryError::NotOnGround {
                number,
                position,
                category: category.cloned(),
            });
        };

        let equip_category = match (&entry.category, crafted) {
            (Some(category), true) => Some(category.clone()),
            (None, true) => {
                tracing::warn!(%number, %position, "crafted item on the ground has no category");
                return Err(InventoryError::MissingCraftedCategory(number));
            }
            (_, false) => None,
        };

        self.ground().remove(number, position, category)?;
        self.equipment()
            .add(unit, number, equip_category.as_ref())?;
        tracing::debug!(%number, %position, unit = %unit.id, "ground -> unit");
        Ok(())
    }

    /// Unequips matching items and drops them on the unit's tile. Returns how
    /// many were dropped.
    ///
    /// # Errors
    ///
    /// `NotEquipped` when nothing matches; the ground is untouched.
    pub fn drop_item(
        &mut self,
        unit: &mut Unit,
        number: ItemNumber,
        category: Option<&Category>,
    ) -> Result<usize> {
        let crafted = special::is_crafted_template(&self.items.get(number)?.category);
        ground::decode(&*self.store, self.rules)?;

        if !unit.items().any(|item| item.matches(number, category)) {
            tracing::warn!(%number, unit = %unit.id, "drop: not equipped");
            return Err(InventoryError::NotEquipped {
                unit: unit.id.clone(),
                number,
                category: category.cloned(),
            });
        }

        let position = unit.position;
        let removed = self.equipment().remove(unit, number, category, false);
        let mut ground = self.ground();
        for item in &removed {
            ground.add(number, position, crafted.then_some(&item.category))?;
        }
        tracing::debug!(%number, %position, dropped = removed.len(), "unit -> ground");
        Ok(removed.len())
    }
}
