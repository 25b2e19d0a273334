//! Tile-entry trigger registered for every tile that holds ground items.

use std::collections::BTreeSet;

use crate::config::ItemRules;
use crate::state::Position;

/// Repeatable trigger fired when a unit steps onto a tile carrying items.
///
/// The trigger is plain data; the host decides how to index it. Its id embeds
/// the coordinate so registering the same tile twice is a no-op for any host
/// that dedupes by id.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileTrigger {
    pub id: String,
    pub position: Position,
    /// Event fired when the predicate holds.
    pub event: String,
    /// Tile flag that suppresses the trigger while set.
    pub suppress_flag: String,
}

impl TileTrigger {
    pub fn for_tile(rules: &ItemRules, position: Position) -> Self {
        Self {
            id: rules.trigger_id(position),
            position,
            event: rules.pick_event.clone(),
            suppress_flag: rules.cannot_pick_flag.clone(),
        }
    }

    /// Evaluates the trigger predicate at move time.
    ///
    /// Only human-controlled units pick items up, and only while the tile does
    /// not carry the suppressing flag.
    pub fn should_fire(&self, mover_is_human: bool, tile_flags: &BTreeSet<String>) -> bool {
        mover_is_human && !tile_flags.contains(&self.suppress_flag)
    }
}
