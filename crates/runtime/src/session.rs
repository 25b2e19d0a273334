//! Session owning the registry, the rules and every host collaborator.

use std::collections::BTreeSet;

use item_core::inventory::Result;
use item_core::{
    EventBus, ItemContext, ItemOracle, ItemRegistry, ItemRules, MapDecor, Position, StatEngine,
    TileTrigger, Unit,
};

use crate::events::{FiredEvent, TriggerTable};
use crate::repository::{self, MemoryVariableStore, SaveFile};
use crate::{BasicStatEngine, DecorLayer, TextTable};

/// One running game as seen by the item engine.
///
/// The session owns state; [`Session::context`] lends it to the engine for a
/// single call.
pub struct Session {
    registry: ItemRegistry,
    rules: ItemRules,
    store: MemoryVariableStore,
    stats: BasicStatEngine,
    triggers: TriggerTable,
    decor: DecorLayer,
    text: TextTable,
}

impl Session {
    /// Creates a session with an empty store and English texts.
    pub fn new(registry: ItemRegistry, rules: ItemRules) -> Self {
        tracing::info!(
            storage = %rules.storage_variable,
            ground = %rules.ground_variable,
            "starting item session"
        );
        Self {
            registry,
            rules,
            store: MemoryVariableStore::new(),
            stats: BasicStatEngine::new(),
            triggers: TriggerTable::new(),
            decor: DecorLayer::new(),
            text: TextTable::english(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: TextTable) -> Self {
        self.text = text;
        self
    }

    /// Lends every collaborator to the engine.
    pub fn context(&mut self) -> ItemContext<'_> {
        ItemContext::new(
            &self.registry,
            &self.rules,
            &mut self.store,
            &mut self.stats,
            &mut self.triggers,
            &mut self.decor,
            &self.text,
        )
    }

    /// Moves a unit and evaluates the triggers of the tile it lands on.
    ///
    /// The returned events are only reported. Nothing here handles the item
    /// pick-up event: the host owns that handler and calls
    /// `pick_item_from_ground` on the unit's tile when it sees one.
    pub fn move_unit(&mut self, unit: &mut Unit, to: Position) -> Vec<FiredEvent> {
        unit.position = to;
        if unit.valid {
            self.stats.commit(unit);
        }
        self.triggers.on_unit_moved(unit)
    }

    /// Writes the variable store to a save file.
    pub fn save(&self, file: &SaveFile) -> repository::Result<()> {
        file.save(&self.store)?;
        tracing::info!(path = %file.path().display(), "session saved");
        Ok(())
    }

    /// Replaces the variable store with a saved one and clears the decor.
    /// Follow with [`Session::restore_ground`].
    ///
    /// Returns `false` when the save file does not exist; the session is then
    /// unchanged.
    pub fn load(&mut self, file: &SaveFile) -> repository::Result<bool> {
        let Some(store) = file.load()? else {
            tracing::info!(path = %file.path().display(), "no save file yet");
            return Ok(false);
        };
        self.store = store;
        self.decor = DecorLayer::new();
        tracing::info!(path = %file.path().display(), "session loaded");
        Ok(true)
    }

    /// Draws every ground item and registers the trigger of every occupied
    /// tile. Needed after [`Session::load`], since images and triggers are
    /// not part of the save.
    pub fn restore_ground(&mut self) -> Result<usize> {
        let entries = self.context().ground().entries()?;
        let mut tiles = BTreeSet::new();
        let mut drawn = BTreeSet::new();
        for entry in &entries {
            tiles.insert(entry.position);
            // One image per type and tile, as the ground draws them.
            if drawn.insert((entry.position, entry.number)) {
                let image = &self.registry.get(entry.number)?.image;
                self.decor.place_image(entry.position, image);
            }
        }
        for &position in &tiles {
            self.triggers
                .register_trigger(TileTrigger::for_tile(&self.rules, position));
        }
        tracing::debug!(entries = entries.len(), tiles = tiles.len(), "ground restored");
        Ok(entries.len())
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn rules(&self) -> &ItemRules {
        &self.rules
    }

    pub fn store(&self) -> &MemoryVariableStore {
        &self.store
    }

    pub fn stats(&self) -> &BasicStatEngine {
        &self.stats
    }

    pub fn triggers(&self) -> &TriggerTable {
        &self.triggers
    }

    pub fn triggers_mut(&mut self) -> &mut TriggerTable {
        &mut self.triggers
    }

    pub fn decor(&self) -> &DecorLayer {
        &self.decor
    }
}
