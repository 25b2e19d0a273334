//! Registry access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemNumber;

/// Errors raised by the item registry.
///
/// Both variants indicate a caller bug: item numbers come from trusted game
/// data, and the registry is never written after it is built.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// Item definition was not found by number.
    #[error("item definition {0} not found")]
    ItemNotFound(ItemNumber),

    /// Write attempted after the registry cache was built.
    #[error("item registry is immutable; cannot define {0}")]
    ImmutableRegistry(ItemNumber),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            ItemNotFound(_) => ErrorSeverity::Validation,
            ImmutableRegistry(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
            ImmutableRegistry(_) => "ORACLE_IMMUTABLE_REGISTRY",
        }
    }
}
