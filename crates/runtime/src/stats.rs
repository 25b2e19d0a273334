//! Derived-stat engine.

use std::collections::BTreeMap;

use item_core::{DerivedStats, ModificationKind, Position, StatEngine, Unit};

/// [`StatEngine`] that sums the combat modifiers of equipped items and keeps
/// the map position of every committed unit.
#[derive(Debug, Default)]
pub struct BasicStatEngine {
    placed: BTreeMap<String, Position>,
    recomputes: usize,
}

impl BasicStatEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position a unit was last committed at.
    pub fn position_of(&self, unit_id: &str) -> Option<Position> {
        self.placed.get(unit_id).copied()
    }

    pub fn recompute_count(&self) -> usize {
        self.recomputes
    }
}

impl StatEngine for BasicStatEngine {
    fn recompute(&mut self, unit: &mut Unit) {
        let stats = unit.items().fold(DerivedStats::default(), |acc, item| DerivedStats {
            defence: acc.defence + item.modifiers.defence,
            damage: acc.damage + item.modifiers.damage,
            resistance: acc.resistance + item.modifiers.resistance,
        });
        let mut kinds: BTreeMap<ModificationKind, usize> = BTreeMap::new();
        for modification in &unit.modifications {
            *kinds.entry(modification.kind()).or_default() += 1;
        }
        let kinds = kinds
            .iter()
            .map(|(kind, count)| format!("{kind}={count}"))
            .collect::<Vec<_>>()
            .join(",");

        tracing::debug!(
            unit = %unit.id,
            defence = stats.defence,
            damage = stats.damage,
            resistance = stats.resistance,
            %kinds,
            "stats recomputed"
        );
        unit.stats = stats;
        self.recomputes += 1;
    }

    fn commit(&mut self, unit: &Unit) {
        self.placed.insert(unit.id.clone(), unit.position);
    }
}
