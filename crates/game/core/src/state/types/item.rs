//! Persisted item placement records.
//!
//! - StorageEntry: one physical item in the shared stash
//! - GroundEntry: one physical item lying on a map tile
//!
//! Both encode to flat store records; see [`crate::host::Record`].

use super::{Category, ItemNumber, Position};
use crate::host::{Record, StoreError};

const NUMBER: &str = "number";
const CATEGORY: &str = "category";
const X: &str = "x";
const Y: &str = "y";

fn decode_number(record: &Record, array: &str) -> Result<ItemNumber, StoreError> {
    let raw = record.int(array, NUMBER)?;
    u32::try_from(raw)
        .map(ItemNumber)
        .map_err(|_| StoreError::out_of_range(array, NUMBER, raw))
}

fn decode_coordinate(record: &Record, array: &str, field: &str) -> Result<i32, StoreError> {
    let raw = record.int(array, field)?;
    i32::try_from(raw).map_err(|_| StoreError::out_of_range(array, field, raw))
}

/// One item held in the shared stash.
///
/// The category is always resolved: either the caller's override (crafted
/// items) or the catalog category of the type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StorageEntry {
    pub category: Category,
    pub number: ItemNumber,
}

impl StorageEntry {
    pub fn new(number: ItemNumber, category: Category) -> Self {
        Self { category, number }
    }

    pub fn matches(&self, number: ItemNumber, category: Option<&Category>) -> bool {
        self.number == number && category.is_none_or(|c| *c == self.category)
    }

    pub fn to_record(&self) -> Record {
        Record::new()
            .with(NUMBER, self.number.0)
            .with(CATEGORY, self.category.as_str())
    }

    pub fn from_record(record: &Record, array: &str) -> Result<Self, StoreError> {
        Ok(Self {
            number: decode_number(record, array)?,
            category: Category::from(record.str(array, CATEGORY)?),
        })
    }
}

/// One item lying on a map tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundEntry {
    pub number: ItemNumber,
    pub position: Position,
    /// Only present for crafted items.
    pub category: Option<Category>,
}

impl GroundEntry {
    pub fn new(number: ItemNumber, position: Position, category: Option<Category>) -> Self {
        Self {
            number,
            position,
            category,
        }
    }

    /// Matches on item number and, when a filter is given, on the stored
    /// override. An entry without an override never matches a category filter.
    pub fn matches(&self, number: ItemNumber, category: Option<&Category>) -> bool {
        self.number == number
            && category.is_none_or(|wanted| self.category.as_ref() == Some(wanted))
    }

    pub fn to_record(&self) -> Record {
        let mut record = Record::new()
            .with(NUMBER, self.number.0)
            .with(X, self.position.x)
            .with(Y, self.position.y);
        if let Some(category) = &self.category {
            record.set(CATEGORY, category.as_str());
        }
        record
    }

    pub fn from_record(record: &Record, array: &str) -> Result<Self, StoreError> {
        Ok(Self {
            number: decode_number(record, array)?,
            position: Position::new(
                decode_coordinate(record, array, X)?,
                decode_coordinate(record, array, Y)?,
            ),
            category: record.opt_str(array, CATEGORY)?.map(Category::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ground_entry_without_override_has_no_category_field() {
        let entry = GroundEntry::new(ItemNumber(5), Position::new(3, 4), None);
        let record = entry.to_record();

        assert!(record.get(CATEGORY).is_none());
        assert_eq!(GroundEntry::from_record(&record, "g"), Ok(entry));
    }

    #[test]
    fn negative_item_number_is_rejected() {
        let record = Record::new().with(NUMBER, -1i64).with(CATEGORY, "sword");

        assert!(matches!(
            StorageEntry::from_record(&record, "s"),
            Err(StoreError::OutOfRange { .. })
        ));
    }

    #[test]
    fn category_filter_on_ground_requires_override() {
        let plain = GroundEntry::new(ItemNumber(5), Position::ORIGIN, None);
        let crafted = GroundEntry::new(ItemNumber(5), Position::ORIGIN, Some("helm".into()));
        let helm = Category::from("helm");

        assert!(plain.matches(ItemNumber(5), None));
        assert!(!plain.matches(ItemNumber(5), Some(&helm)));
        assert!(crafted.matches(ItemNumber(5), Some(&helm)));
    }
}
