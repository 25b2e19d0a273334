//! Common error infrastructure for item-core.
//!
//! Domain errors live next to the code that raises them (`OracleError` in
//! [`crate::env`], `StoreError` in [`crate::host`], `InventoryError` in
//! [`crate::inventory`]). They all implement [`GameError`] so callers can
//! classify them uniformly.
//!
//! Nothing in the engine retries: every operation is a deterministic local
//! state edit, so an error always means bad input or corrupted data.

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// The requested transfer has nothing to move; state is untouched.
    ///
    /// Examples: item not equipped, stash has no matching entry
    Recoverable,

    /// Invalid input from the caller.
    ///
    /// Examples: unknown item number, crafted item without a category
    Validation,

    /// Persisted data does not have the shape this crate writes.
    ///
    /// Examples: record missing a field
    Internal,

    /// Caller bug that must not be papered over.
    ///
    /// Examples: write to the sealed registry
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all item-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable identifiers for logs and tests
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
