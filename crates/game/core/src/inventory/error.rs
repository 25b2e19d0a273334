//! Errors raised by the inventory components and transfers.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::host::StoreError;
use crate::state::{Category, ItemNumber, Position};

/// Errors surfaced by storage, ground, equipment and transfer operations.
///
/// Removing something that is not there is a silent no-op for the single
/// components. Only the orchestrated transfers turn an empty source into an
/// error, so that nothing is ever added to a destination without having been
/// taken from a source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Crafted template equipped without choosing a category.
    #[error("item {0} is a crafted template and needs a category")]
    MissingCraftedCategory(ItemNumber),

    #[error("unit '{unit}' has no item {number} equipped{}", fmt_category(.category))]
    NotEquipped {
        unit: String,
        number: ItemNumber,
        category: Option<Category>,
    },

    #[error("storage holds no item {number}{}", fmt_category(.category))]
    NotInStorage {
        number: ItemNumber,
        category: Option<Category>,
    },

    #[error("no item {number}{} on the ground at {position}", fmt_category(.category))]
    NotOnGround {
        number: ItemNumber,
        position: Position,
        category: Option<Category>,
    },
}

fn fmt_category(category: &Option<Category>) -> String {
    category
        .as_ref()
        .map(|c| format!(" of category '{c}'"))
        .unwrap_or_default()
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        use InventoryError::*;
        match self {
            Oracle(err) => err.severity(),
            Store(err) => err.severity(),
            MissingCraftedCategory(_) => ErrorSeverity::Validation,
            NotEquipped { .. } | NotInStorage { .. } | NotOnGround { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use InventoryError::*;
        match self {
            Oracle(err) => err.error_code(),
            Store(err) => err.error_code(),
            MissingCraftedCategory(_) => "INVENTORY_MISSING_CRAFTED_CATEGORY",
            NotEquipped { .. } => "INVENTORY_NOT_EQUIPPED",
            NotInStorage { .. } => "INVENTORY_NOT_IN_STORAGE",
            NotOnGround { .. } => "INVENTORY_NOT_ON_GROUND",
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
