//! The data files shipped with the crate load cleanly.

use std::path::PathBuf;

use item_content::ContentFactory;
use item_core::inventory::special;
use item_core::{ItemNumber, ItemOracle, ItemRules};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

#[test]
fn shipped_rules_match_defaults() {
    assert_eq!(factory().load_rules().unwrap(), ItemRules::default());
}

#[test]
fn shipped_catalog_has_special_items() {
    let registry = factory().build_registry().unwrap();

    for number in [special::FOUL_POTION, special::BOOK_OF_COURAGE] {
        assert!(registry.get(number).is_ok(), "missing {number}");
    }
    for number in special::LIMITED_REGULAR_ITEMS {
        assert_eq!(registry.get(number).unwrap().category, special::LIMITED_CATEGORY);
    }
    let crafted = registry
        .all_definitions()
        .into_iter()
        .filter(|item| special::is_crafted_template(&item.category))
        .count();
    assert_eq!(crafted, 2);
    assert!(registry.get(ItemNumber(9999)).is_err());
}
