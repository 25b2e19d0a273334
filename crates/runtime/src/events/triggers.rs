//! Coordinate-indexed trigger table.

use std::collections::{BTreeMap, BTreeSet};

use item_core::{EventBus, Position, TileTrigger, Unit};

/// Event fired at a tile, in firing order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiredEvent {
    pub name: String,
    pub position: Position,
}

/// [`EventBus`] that indexes tile triggers by coordinate.
///
/// Triggers are deduplicated by id and never torn down: a tile that once held
/// items keeps its trigger, which simply finds nothing to pick up later.
#[derive(Debug, Default)]
pub struct TriggerTable {
    ids: BTreeSet<String>,
    by_tile: BTreeMap<Position, Vec<TileTrigger>>,
    flags: BTreeMap<Position, BTreeSet<String>>,
    fired: Vec<FiredEvent>,
}

impl TriggerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn triggers_at(&self, position: Position) -> &[TileTrigger] {
        self.by_tile
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Marks a tile with a flag (e.g. `cannot_pick`).
    pub fn set_tile_flag(&mut self, position: Position, flag: impl Into<String>) {
        self.flags.entry(position).or_default().insert(flag.into());
    }

    pub fn clear_tile_flag(&mut self, position: Position, flag: &str) {
        if let Some(flags) = self.flags.get_mut(&position) {
            flags.remove(flag);
            if flags.is_empty() {
                self.flags.remove(&position);
            }
        }
    }

    /// Evaluates the triggers of the unit's tile after it moved there and
    /// fires every one whose predicate holds. Returns the fired events.
    pub fn on_unit_moved(&mut self, unit: &Unit) -> Vec<FiredEvent> {
        let empty = BTreeSet::new();
        let flags = self.flags.get(&unit.position).unwrap_or(&empty);

        let events: Vec<FiredEvent> = self
            .triggers_at(unit.position)
            .iter()
            .filter(|trigger| trigger.should_fire(unit.human_controlled, flags))
            .map(|trigger| FiredEvent {
                name: trigger.event.clone(),
                position: trigger.position,
            })
            .collect();

        for event in &events {
            self.fire(&event.name, event.position);
        }
        events
    }

    /// Every event fired so far.
    pub fn fired(&self) -> &[FiredEvent] {
        &self.fired
    }

    /// Takes the fired-event log, leaving it empty.
    pub fn drain_fired(&mut self) -> Vec<FiredEvent> {
        std::mem::take(&mut self.fired)
    }
}

impl EventBus for TriggerTable {
    fn fire(&mut self, event: &str, position: Position) {
        tracing::debug!(event, %position, "event fired");
        self.fired.push(FiredEvent {
            name: event.to_owned(),
            position,
        });
    }

    fn register_trigger(&mut self, trigger: TileTrigger) -> bool {
        if !self.ids.insert(trigger.id.clone()) {
            return false;
        }
        tracing::debug!(id = %trigger.id, position = %trigger.position, "trigger registered");
        self.by_tile.entry(trigger.position).or_default().push(trigger);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_core::ItemRules;

    const TILE: Position = Position { x: 3, y: 4 };

    fn table_with_trigger() -> TriggerTable {
        let mut table = TriggerTable::new();
        assert!(table.register_trigger(TileTrigger::for_tile(&ItemRules::default(), TILE)));
        table
    }

    #[test]
    fn duplicate_ids_are_ignored() {
        let mut table = table_with_trigger();
        assert!(!table.register_trigger(TileTrigger::for_tile(&ItemRules::default(), TILE)));
        assert_eq!(table.len(), 1);
        assert_eq!(table.triggers_at(TILE).len(), 1);
    }

    #[test]
    fn human_unit_fires_pick_event() {
        let mut table = table_with_trigger();
        let hero = Unit::new("hero", TILE);

        let fired = table.on_unit_moved(&hero);

        assert_eq!(
            fired,
            vec![FiredEvent {
                name: "item_pick".to_owned(),
                position: TILE,
            }]
        );
        assert_eq!(table.fired().len(), 1);
    }

    #[test]
    fn ai_units_and_flagged_tiles_do_not_fire() {
        let mut table = table_with_trigger();
        let goblin = Unit {
            human_controlled: false,
            ..Unit::new("goblin", TILE)
        };
        assert!(table.on_unit_moved(&goblin).is_empty());

        table.set_tile_flag(TILE, "cannot_pick");
        assert!(table.on_unit_moved(&Unit::new("hero", TILE)).is_empty());

        table.clear_tile_flag(TILE, "cannot_pick");
        assert_eq!(table.on_unit_moved(&Unit::new("hero", TILE)).len(), 1);
        assert_eq!(table.drain_fired().len(), 1);
        assert!(table.fired().is_empty());
    }

    #[test]
    fn other_tiles_are_quiet() {
        let mut table = table_with_trigger();
        assert!(table.on_unit_moved(&Unit::new("hero", Position::new(4, 3))).is_empty());
    }
}
