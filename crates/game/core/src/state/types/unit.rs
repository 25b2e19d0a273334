//! Character-side view of items.
//!
//! A unit carries an ordered list of attached modifications. Equipped items
//! are one kind of modification; traits and plain scenario objects share the
//! same list but are not items.

use std::collections::BTreeMap;

use super::{Category, ItemNumber, Position};
use crate::env::CombatModifiers;
use crate::host::Value;

/// Item record attached to a unit.
///
/// Built from the catalog type at equip time, with runtime overrides: crafted
/// items carry the chosen category and possibly scaled modifiers, and the
/// description may have flavour text appended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItem {
    pub number: ItemNumber,
    pub category: Category,
    pub name: String,
    pub description: String,
    pub modifiers: CombatModifiers,
    pub image: String,
    /// Quest effects and other items the player never sees as gear.
    pub silent: bool,
}

impl EquippedItem {
    pub fn matches(&self, number: ItemNumber, category: Option<&Category>) -> bool {
        self.number == number && category.is_none_or(|c| *c == self.category)
    }
}

/// Trait granted to a unit (e.g. `fearless`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitModification {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Trait slot the combat effect applies to.
    pub effect_slot: String,
}

/// Scenario object that is not an item (no category).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectModification {
    pub id: String,
    pub description: String,
}

/// Modification tag used by host filters (`object`, `trait`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ModificationKind {
    Object,
    Trait,
}

/// Entry of a unit's modification list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modification {
    Item(EquippedItem),
    Trait(TraitModification),
    Object(ObjectModification),
}

impl Modification {
    pub fn as_item(&self) -> Option<&EquippedItem> {
        match self {
            Modification::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Items and scenario objects are both `object` modifications on the
    /// host side; only the presence of a category tells them apart.
    pub fn kind(&self) -> ModificationKind {
        match self {
            Modification::Item(_) | Modification::Object(_) => ModificationKind::Object,
            Modification::Trait(_) => ModificationKind::Trait,
        }
    }
}

/// Derived combat statistics written by the stat engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    pub defence: i32,
    pub damage: i32,
    pub resistance: i32,
}

/// A character as seen by the item engine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: String,
    pub position: Position,
    /// True while the unit is placed on the map.
    pub valid: bool,
    pub human_controlled: bool,
    /// Unit-scoped variable bag.
    pub variables: BTreeMap<String, Value>,
    pub modifications: Vec<Modification>,
    pub stats: DerivedStats,
}

impl Unit {
    /// A human-controlled unit placed on the map.
    pub fn new(id: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            position,
            valid: true,
            human_controlled: true,
            ..Self::default()
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &EquippedItem> {
        self.modifications.iter().filter_map(Modification::as_item)
    }

    pub fn has_trait(&self, id: &str) -> bool {
        self.modifications
            .iter()
            .any(|m| matches!(m, Modification::Trait(t) if t.id == id))
    }

    pub fn add_modification(&mut self, modification: Modification) {
        self.modifications.push(modification);
    }

    /// Detaches every modification matching `filter` and returns them in
    /// attachment order.
    pub fn remove_modifications<F>(&mut self, mut filter: F) -> Vec<Modification>
    where
        F: FnMut(&Modification) -> bool,
    {
        let (removed, kept) = std::mem::take(&mut self.modifications)
            .into_iter()
            .partition(|m| filter(m));
        self.modifications = kept;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_render_as_host_tags() {
        let courage = Modification::Trait(TraitModification {
            id: "fearless".to_owned(),
            name: "fearless".to_owned(),
            description: String::new(),
            effect_slot: "courage".to_owned(),
        });
        let note = Modification::Object(ObjectModification {
            id: "map_note".to_owned(),
            description: String::new(),
        });

        assert_eq!(courage.kind().to_string(), "trait");
        assert_eq!(note.kind().to_string(), "object");
        assert!(ModificationKind::Object < ModificationKind::Trait);
    }
}
