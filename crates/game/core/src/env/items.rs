use crate::state::{Category, ItemNumber};

use super::OracleError;

/// Read-only access to the item catalog.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, number: ItemNumber) -> Option<&ItemType>;

    /// Returns every definition, ordered by item number.
    fn all_definitions(&self) -> Vec<&ItemType>;

    /// Looks up a definition, failing for unknown numbers. There is no
    /// placeholder item.
    fn get(&self, number: ItemNumber) -> Result<&ItemType, OracleError> {
        self.definition(number)
            .ok_or(OracleError::ItemNotFound(number))
    }
}

/// Backing source the registry builds its cache from.
pub trait ItemCatalog: Send + Sync {
    fn items(&self) -> Vec<ItemType>;
}

impl ItemCatalog for Vec<ItemType> {
    fn items(&self) -> Vec<ItemType> {
        self.clone()
    }
}

/// Immutable item type definition.
///
/// # Crafted templates
///
/// Types whose category is `weaponword` or `armourword` are templates: the
/// real category is chosen when the item is crafted and travels with the
/// instance as an override (see [`crate::inventory::special`]).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemType {
    pub number: ItemNumber,
    pub category: Category,
    /// Display name. Empty for hidden items.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flavour_text: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: CombatModifiers,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: String,
    /// Invisible quest-effect item.
    #[cfg_attr(feature = "serde", serde(default))]
    pub silent: bool,
}

impl ItemType {
    pub fn new(number: ItemNumber, category: impl Into<Category>, name: impl Into<String>) -> Self {
        Self {
            number,
            category: category.into(),
            name: name.into(),
            description: String::new(),
            flavour_text: None,
            modifiers: CombatModifiers::default(),
            image: String::new(),
            silent: false,
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: CombatModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_flavour(mut self, flavour: impl Into<String>) -> Self {
        self.flavour_text = Some(flavour.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }
}

/// Combat modifiers granted while an item is equipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatModifiers {
    /// Flat defence bonus (percent points).
    pub defence: i32,
    /// Flat damage bonus.
    pub damage: i32,
    /// Resistance bonus (percent points).
    pub resistance: i32,
}

impl CombatModifiers {
    pub const fn new(defence: i32, damage: i32, resistance: i32) -> Self {
        Self {
            defence,
            damage,
            resistance,
        }
    }

    pub const fn defence(defence: i32) -> Self {
        Self::new(defence, 0, 0)
    }
}
