//! Errors raised while decoding persisted records.

use crate::error::{ErrorSeverity, GameError};

/// A record read from the variable store does not have the expected shape.
///
/// The store is written only by this crate, so a malformed record means the
/// save data was edited or corrupted elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("record in '{array}' is missing field '{field}'")]
    MissingField { array: String, field: String },

    #[error("field '{field}' of a record in '{array}' is not a {expected}")]
    WrongType {
        array: String,
        field: String,
        expected: &'static str,
    },

    #[error("field '{field}' of a record in '{array}' is out of range: {value}")]
    OutOfRange {
        array: String,
        field: String,
        value: i64,
    },
}

impl StoreError {
    pub(crate) fn missing(array: &str, field: &str) -> Self {
        Self::MissingField {
            array: array.to_owned(),
            field: field.to_owned(),
        }
    }

    pub(crate) fn wrong_type(array: &str, field: &str, expected: &'static str) -> Self {
        Self::WrongType {
            array: array.to_owned(),
            field: field.to_owned(),
            expected,
        }
    }

    pub(crate) fn out_of_range(array: &str, field: &str, value: i64) -> Self {
        Self::OutOfRange {
            array: array.to_owned(),
            field: field.to_owned(),
            value,
        }
    }
}

impl GameError for StoreError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            StoreError::MissingField { .. } => "STORE_MISSING_FIELD",
            StoreError::WrongType { .. } => "STORE_WRONG_TYPE",
            StoreError::OutOfRange { .. } => "STORE_OUT_OF_RANGE",
        }
    }
}
