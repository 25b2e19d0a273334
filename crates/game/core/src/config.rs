use crate::state::Position;

/// Tunable names and markup used by the item engine.
///
/// These are host-facing identifiers (variable names, event names, markup),
/// not gameplay rules. The special-case item numbers and category lists live
/// in [`crate::inventory::special`] and are not configurable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemRules {
    /// Store array holding the shared stash.
    pub storage_variable: String,

    /// Store array holding items lying on the map.
    pub ground_variable: String,

    /// Event fired to make a unit pick up an item from its tile.
    pub pick_event: String,

    /// Prefix of tile trigger ids; the coordinate is appended.
    pub trigger_prefix: String,

    /// Tile flag that suppresses automatic pick-up.
    pub cannot_pick_flag: String,

    /// Colour used for flavour text appended to item descriptions.
    pub flavour_colour: String,
}

impl ItemRules {
    pub const DEFAULT_STORAGE_VARIABLE: &'static str = "item_storage";
    pub const DEFAULT_GROUND_VARIABLE: &'static str = "items_on_the_ground";
    pub const DEFAULT_PICK_EVENT: &'static str = "item_pick";
    pub const DEFAULT_TRIGGER_PREFIX: &'static str = "ie";
    pub const DEFAULT_CANNOT_PICK_FLAG: &'static str = "cannot_pick";
    pub const DEFAULT_FLAVOUR_COLOUR: &'static str = "#808080";

    pub fn new() -> Self {
        Self {
            storage_variable: Self::DEFAULT_STORAGE_VARIABLE.to_owned(),
            ground_variable: Self::DEFAULT_GROUND_VARIABLE.to_owned(),
            pick_event: Self::DEFAULT_PICK_EVENT.to_owned(),
            trigger_prefix: Self::DEFAULT_TRIGGER_PREFIX.to_owned(),
            cannot_pick_flag: Self::DEFAULT_CANNOT_PICK_FLAG.to_owned(),
            flavour_colour: Self::DEFAULT_FLAVOUR_COLOUR.to_owned(),
        }
    }

    /// Trigger id for a tile. The separator keeps `(1, 11)` and `(11, 1)`
    /// apart.
    pub fn trigger_id(&self, position: Position) -> String {
        format!("{}{}_{}", self.trigger_prefix, position.x, position.y)
    }

    /// Wraps flavour text in the muted/italic markup appended to descriptions.
    pub fn flavour_markup(&self, flavour: &str) -> String {
        format!(
            "\n<span color='{}'><i>{}</i></span>",
            self.flavour_colour, flavour
        )
    }
}

impl Default for ItemRules {
    fn default() -> Self {
        Self::new()
    }
}
