//! Record encoding used by the persistent variable store.
//!
//! The host store only understands scalar values and flat records. Storage
//! and ground lists are persisted as arrays of records; this module provides
//! the typed accessors the codecs in [`crate::state`] build on.

use std::collections::BTreeMap;

use super::StoreError;

/// Scalar value held by a store variable or a record field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

/// Flat key/value record; one element of a store array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.fields.insert(key.to_owned(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Reads a required integer field.
    ///
    /// `array` names the store array the record came from and is only used to
    /// build the error.
    pub fn int(&self, array: &str, key: &str) -> Result<i64, StoreError> {
        let value = self
            .fields
            .get(key)
            .ok_or_else(|| StoreError::missing(array, key))?;
        value
            .as_int()
            .ok_or_else(|| StoreError::wrong_type(array, key, "integer"))
    }

    /// Reads a required string field.
    pub fn str(&self, array: &str, key: &str) -> Result<&str, StoreError> {
        self.opt_str(array, key)?
            .ok_or_else(|| StoreError::missing(array, key))
    }

    /// Reads an optional string field. An absent field is `Ok(None)`; a field
    /// of another type is an error.
    pub fn opt_str(&self, array: &str, key: &str) -> Result<Option<&str>, StoreError> {
        match self.fields.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| StoreError::wrong_type(array, key, "string")),
        }
    }
}
