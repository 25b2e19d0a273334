//! Hard-coded item special cases.
//!
//! These numbers and tags are game data that ideally belongs in the item
//! catalog itself. Until the catalog grows the matching fields they are kept
//! here, in one place, as explicit lookups.

use crate::state::{Category, ItemNumber};

/// "Foul Potion": first equip starts the unit's starvation counter.
pub const FOUL_POTION: ItemNumber = ItemNumber(16);

/// Unit variable initialised by [`FOUL_POTION`].
pub const STARVING_VARIABLE: &str = "starving";

/// "Book of Courage": equipping it also grants the `fearless` trait.
pub const BOOK_OF_COURAGE: ItemNumber = ItemNumber(89);

/// Trait granted by [`BOOK_OF_COURAGE`]; also the trait slot its effect targets.
pub const FEARLESS_TRAIT: &str = "fearless";

/// Text keys for the fearless trait.
pub const FEARLESS_NAME_KEY: &str = "trait_fearless";
pub const FEARLESS_DESCRIPTION_KEY: &str = "trait_fearless_description";

/// Crafted templates: the category is chosen per instance.
pub const CRAFTED_TEMPLATES: [&str; 2] = ["weaponword", "armourword"];

/// Crafted pieces in these categories get a third of the base defence.
pub const REDUCED_DEFENCE_CATEGORIES: [&str; 3] = ["helm", "boots", "gauntlets"];

/// Divisor applied to the defence of [`REDUCED_DEFENCE_CATEGORIES`].
pub const REDUCED_DEFENCE_DIVISOR: i32 = 3;

/// Category shared by unequippable books and equippable orbs.
pub const LIMITED_CATEGORY: &str = "limited";

/// The only `limited` items shown as regular gear (the orbs). Every other
/// `limited` item is a book and stays hidden.
pub const LIMITED_REGULAR_ITEMS: [ItemNumber; 2] = [ItemNumber(602), ItemNumber(610)];

/// Categories containing this fragment are consumables, not gear.
pub const POTION_FRAGMENT: &str = "potion";

pub fn is_crafted_template(category: &Category) -> bool {
    CRAFTED_TEMPLATES.contains(&category.as_str())
}

pub fn has_reduced_defence(category: &Category) -> bool {
    REDUCED_DEFENCE_CATEGORIES.contains(&category.as_str())
}
