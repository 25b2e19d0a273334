//! In-crate test doubles for the host collaborators.

use std::collections::BTreeMap;

use crate::env::{CombatModifiers, ItemRegistry, ItemType};
use crate::host::{
    EventBus, MapDecor, Record, StatEngine, TextOracle, TileTrigger, Value, VariableStore,
};
use crate::state::{ItemNumber, Position, Unit};

/// Small catalog covering every special case the engine knows about.
pub(crate) fn catalog() -> ItemRegistry {
    ItemRegistry::from_items(vec![
        ItemType::new(ItemNumber(5), "gem", "Gem").with_image("items/gem.png"),
        ItemType::new(ItemNumber(7), "helm", "Iron Helm")
            .with_modifiers(CombatModifiers::defence(9))
            .with_image("items/helm.png"),
        ItemType::new(ItemNumber(16), "potion", "Foul Potion").with_image("items/potion.png"),
        ItemType::new(ItemNumber(89), "limited", "Book of Courage").with_image("items/book.png"),
        ItemType::new(ItemNumber(100), "sword", "Sword")
            .with_description("A plain blade.")
            .with_flavour("Sharp on one side.")
            .with_modifiers(CombatModifiers::new(0, 5, 0))
            .with_image("items/sword.png"),
        ItemType::new(ItemNumber(300), "armourword", "Crafted Armour")
            .with_modifiers(CombatModifiers::defence(30))
            .with_image("items/armour.png"),
        ItemType::new(ItemNumber(301), "weaponword", "Crafted Weapon")
            .with_modifiers(CombatModifiers::new(12, 8, 0))
            .with_image("items/weapon.png"),
        ItemType::new(ItemNumber(602), "limited", "Orb of Light").with_image("items/orb.png"),
        ItemType::new(ItemNumber(603), "limited", "Tome of Lore").with_image("items/book.png"),
        ItemType::new(ItemNumber(610), "limited", "Orb of Dark").with_image("items/orb.png"),
        ItemType::new(ItemNumber(700), "quest", "Mark of the Hunt").silent(),
        ItemType::new(ItemNumber(701), "amulet", ""),
    ])
}

#[derive(Default)]
pub(crate) struct MemoryStore {
    variables: BTreeMap<String, Value>,
    arrays: BTreeMap<String, Vec<Record>>,
}

impl VariableStore for MemoryStore {
    fn variable(&self, name: &str) -> Option<Value> {
        self.variables.get(name).cloned()
    }

    fn set_variable(&mut self, name: &str, value: Option<Value>) {
        match value {
            Some(value) => {
                self.variables.insert(name.to_owned(), value);
            }
            None => {
                self.variables.remove(name);
            }
        }
    }

    fn array(&self, name: &str) -> Vec<Record> {
        self.arrays.get(name).cloned().unwrap_or_default()
    }

    fn set_array(&mut self, name: &str, records: Vec<Record>) {
        self.arrays.insert(name.to_owned(), records);
    }
}

#[derive(Default)]
pub(crate) struct RecordingStats {
    pub recomputed: usize,
    pub committed: Vec<String>,
}

impl StatEngine for RecordingStats {
    fn recompute(&mut self, unit: &mut Unit) {
        self.recomputed += 1;
        unit.stats.defence = unit.items().map(|item| item.modifiers.defence).sum();
    }

    fn commit(&mut self, unit: &Unit) {
        self.committed.push(unit.id.clone());
    }
}

#[derive(Default)]
pub(crate) struct RecordingEvents {
    pub fired: Vec<(String, Position)>,
    pub triggers: BTreeMap<String, TileTrigger>,
}

impl EventBus for RecordingEvents {
    fn fire(&mut self, event: &str, position: Position) {
        self.fired.push((event.to_owned(), position));
    }

    fn register_trigger(&mut self, trigger: TileTrigger) -> bool {
        if self.triggers.contains_key(&trigger.id) {
            return false;
        }
        self.triggers.insert(trigger.id.clone(), trigger);
        true
    }
}

#[derive(Default)]
pub(crate) struct RecordingDecor {
    pub placed: Vec<(Position, String)>,
    pub cleared: Vec<(Position, String)>,
}

impl RecordingDecor {
    /// Placed more often than cleared.
    pub fn has_image(&self, position: Position, image: &str) -> bool {
        let placed = self
            .placed
            .iter()
            .filter(|(p, i)| *p == position && i == image)
            .count();
        let cleared = self
            .cleared
            .iter()
            .filter(|(p, i)| *p == position && i == image)
            .count();
        placed > cleared
    }
}

impl MapDecor for RecordingDecor {
    fn place_image(&mut self, position: Position, image: &str) {
        self.placed.push((position, image.to_owned()));
    }

    fn clear_image(&mut self, position: Position, image: &str) {
        self.cleared.push((position, image.to_owned()));
    }
}

/// Text table that echoes keys.
pub(crate) struct KeyText;

impl TextOracle for KeyText {
    fn text(&self, key: &str) -> String {
        key.to_owned()
    }
}

/// Owns one of every double and hands out contexts.
pub(crate) struct Harness {
    pub items: ItemRegistry,
    pub rules: crate::config::ItemRules,
    pub store: MemoryStore,
    pub stats: RecordingStats,
    pub events: RecordingEvents,
    pub decor: RecordingDecor,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            items: catalog(),
            rules: crate::config::ItemRules::default(),
            store: MemoryStore::default(),
            stats: RecordingStats::default(),
            events: RecordingEvents::default(),
            decor: RecordingDecor::default(),
        }
    }

    pub fn context(&mut self) -> super::ItemContext<'_> {
        super::ItemContext::new(
            &self.items,
            &self.rules,
            &mut self.store,
            &mut self.stats,
            &mut self.events,
            &mut self.decor,
            &KeyText,
        )
    }
}
