//! Items equipped on units.
//!
//! Equipping attaches an [`EquippedItem`] modification to the unit; the
//! unit's modification list is the only record of it. Every change ends with
//! a stat refresh unless the caller batches several changes itself.

use super::special;
use super::{InventoryError, Result};
use crate::config::ItemRules;
use crate::env::ItemOracle;
use crate::host::{StatEngine, TextOracle, Value};
use crate::state::{Category, EquippedItem, ItemNumber, Modification, TraitModification, Unit};

/// Equipment view over the catalog, the stat engine and the text table.
pub struct Equipment<'c> {
    items: &'c dyn ItemOracle,
    rules: &'c ItemRules,
    stats: &'c mut dyn StatEngine,
    text: &'c dyn TextOracle,
}

impl<'c> Equipment<'c> {
    pub fn new(
        items: &'c dyn ItemOracle,
        rules: &'c ItemRules,
        stats: &'c mut dyn StatEngine,
        text: &'c dyn TextOracle,
    ) -> Self {
        Self {
            items,
            rules,
            stats,
            text,
        }
    }

    /// Every item modification on the unit, in attachment order.
    pub fn list(unit: &Unit) -> Vec<&EquippedItem> {
        unit.items().collect()
    }

    /// Items the player manages as gear.
    ///
    /// Leaves out nameless and silent items, consumables (category containing
    /// `potion`) and `limited` books. Of the `limited` category only the orbs
    /// listed in [`special::LIMITED_REGULAR_ITEMS`] count as gear.
    pub fn list_regular(unit: &Unit) -> Vec<&EquippedItem> {
        unit.items().filter(|item| is_regular(item)).collect()
    }

    /// First equipped item of a category.
    pub fn find<'u>(unit: &'u Unit, category: &Category) -> Option<&'u EquippedItem> {
        unit.items().find(|item| item.category == *category)
    }

    /// Equips one item.
    ///
    /// # Errors
    ///
    /// - `Oracle(ItemNotFound)` for unknown numbers
    /// - `MissingCraftedCategory` when a crafted template is equipped without
    ///   a category
    ///
    /// The unit is untouched on error.
    pub fn add(
        &mut self,
        unit: &mut Unit,
        number: ItemNumber,
        category: Option<&Category>,
    ) -> Result<()> {
        let item_type = self.items.get(number)?;
        let mut modifiers = item_type.modifiers;

        let category = if special::is_crafted_template(&item_type.category) {
            let Some(category) = category else {
                tracing::warn!(%number, unit = %unit.id, "crafted item equipped without a category");
                return Err(InventoryError::MissingCraftedCategory(number));
            };
            if special::has_reduced_defence(category) {
                modifiers.defence /= special::REDUCED_DEFENCE_DIVISOR;
            }
            category.clone()
        } else {
            item_type.category.clone()
        };

        let mut description = item_type.description.clone();
        if let Some(flavour) = &item_type.flavour_text {
            description.push_str(&self.rules.flavour_markup(flavour));
        }

        tracing::debug!(%number, %category, unit = %unit.id, "equip");
        unit.add_modification(Modification::Item(EquippedItem {
            number,
            category,
            name: item_type.name.clone(),
            description,
            modifiers,
            image: item_type.image.clone(),
            silent: item_type.silent,
        }));

        if number == special::FOUL_POTION {
            unit.variables
                .entry(special::STARVING_VARIABLE.to_owned())
                .or_insert(Value::Int(0));
        }
        if number == special::BOOK_OF_COURAGE && !unit.has_trait(special::FEARLESS_TRAIT) {
            unit.add_modification(Modification::Trait(self.fearless_trait()));
        }

        self.refresh(unit);
        Ok(())
    }

    /// Unequips every modification matching the number (and category when
    /// given). Returns the removed items.
    ///
    /// With `skip_stat_update` the caller must call [`Equipment::refresh`]
    /// after the batch.
    pub fn remove(
        &mut self,
        unit: &mut Unit,
        number: ItemNumber,
        category: Option<&Category>,
        skip_stat_update: bool,
    ) -> Vec<EquippedItem> {
        let removed: Vec<EquippedItem> = unit
            .remove_modifications(|m| m.as_item().is_some_and(|item| item.matches(number, category)))
            .into_iter()
            .filter_map(|m| match m {
                Modification::Item(item) => Some(item),
                _ => None,
            })
            .collect();
        tracing::debug!(%number, removed = removed.len(), unit = %unit.id, "unequip");

        if !skip_stat_update {
            self.refresh(unit);
        }
        removed
    }

    /// Recomputes derived stats and re-commits the unit if it is on the map.
    pub fn refresh(&mut self, unit: &mut Unit) {
        self.stats.recompute(unit);
        if unit.valid {
            self.stats.commit(unit);
        }
    }

    fn fearless_trait(&self) -> TraitModification {
        TraitModification {
            id: special::FEARLESS_TRAIT.to_owned(),
            name: self.text.text(special::FEARLESS_NAME_KEY),
            description: self.text.text(special::FEARLESS_DESCRIPTION_KEY),
            effect_slot: special::FEARLESS_TRAIT.to_owned(),
        }
    }
}

fn is_regular(item: &EquippedItem) -> bool {
    if item.name.is_empty() || item.silent || item.category.contains(special::POTION_FRAGMENT) {
        return false;
    }
    if item.category == special::LIMITED_CATEGORY {
        return special::LIMITED_REGULAR_ITEMS.contains(&item.number);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ItemRegistry;
    use crate::inventory::testing::{KeyText, RecordingStats, catalog};
    use crate::state::{ModificationKind, ObjectModification, Position};

    struct Fixture {
        items: ItemRegistry,
        rules: ItemRules,
        stats: RecordingStats,
        text: KeyText,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                items: catalog(),
                rules: ItemRules::default(),
                stats: RecordingStats::default(),
                text: KeyText,
            }
        }

        fn equipment(&mut self) -> Equipment<'_> {
            Equipment::new(&self.items, &self.rules, &mut self.stats, &self.text)
        }
    }

    fn unit() -> Unit {
        Unit::new("hero", Position::new(2, 2))
    }

    #[test]
    fn crafted_helm_gets_a_third_of_the_defence() {
        let mut fx = Fixture::new();
        let mut hero = unit();

        for (category, expected) in [("helm", 10), ("boots", 10), ("gauntlets", 10), ("armour", 30)] {
            fx.equipment()
                .add(&mut hero, ItemNumber(300), Some(&category.into()))
                .unwrap();
            let item = Equipment::find(&hero, &category.into()).expect("equipped");
            assert_eq!(item.modifiers.defence, expected, "category {category}");
        }
    }

    #[test]
    fn crafted_weapon_defence_is_unscaled() {
        let mut fx = Fixture::new();
        let mut hero = unit();

        fx.equipment()
            .add(&mut hero, ItemNumber(301), Some(&"sword".into()))
            .unwrap();
        let item = Equipment::find(&hero, &"sword".into()).unwrap();
        assert_eq!(item.modifiers.defence, 12);
        assert_eq!(item.number, ItemNumber(301));
    }

    #[test]
    fn crafted_item_without_category_is_rejected() {
        let mut fx = Fixture::new();
        let mut hero = unit();

        let err = fx.equipment().add(&mut hero, ItemNumber(300), None).unwrap_err();
        assert_eq!(err, InventoryError::MissingCraftedCategory(ItemNumber(300)));
        assert!(hero.modifications.is_empty());
        assert_eq!(fx.stats.recomputed, 0);
    }

    #[test]
    fn override_is_ignored_for_regular_types() {
        let mut fx = Fixture::new();
        let mut hero = unit();

        fx.equipment()
            .add(&mut hero, ItemNumber(100), Some(&"helm".into()))
            .unwrap();
        assert_eq!(Equipment::list(&hero)[0].category, "sword");
    }

    #[test]
    fn flavour_text_is_appended_in_muted_markup() {
        let mut fx = Fixture::new();
        let mut hero = unit();

        fx.equipment().add(&mut hero, ItemNumber(100), None).unwrap();
        let item = Equipment::list(&hero)[0];
        assert_eq!(
            item.description,
            "A plain blade.\n<span color='#808080'><i>Sharp on one side.</i></span>"
        );
    }

    #[test]
    fn foul_potion_starts_starving_once() {
        let mut fx = Fixture::new();
        let mut hero = unit();

        fx.equipment().add(&mut hero, ItemNumber(16), None).unwrap();
        assert_eq!(hero.variables.get("starving"), Some(&Value::Int(0)));

        hero.variables.insert("starving".to_owned(), Value::Int(4));
        fx.equipment().add(&mut hero, ItemNumber(16), None).unwrap();
        assert_eq!(hero.variables.get("starving"), Some(&Value::Int(4)));
    }

    #[test]
    fn book_of_courage_grants_fearless_once() {
        let mut fx = Fixture::new();
        let mut hero = unit();

        fx.equipment().add(&mut hero, ItemNumber(89), None).unwrap();
        fx.equipment().add(&mut hero, ItemNumber(89), None).unwrap();

        let traits: Vec<_> = hero
            .modifications
            .iter()
            .filter(|m| m.kind() == ModificationKind::Trait)
            .collect();
        assert_eq!(traits.len(), 1);
        let Modification::Trait(fearless) = traits[0] else {
            panic!("expected trait");
        };
        assert_eq!(fearless.id, "fearless");
        assert_eq!(fearless.effect_slot, "fearless");
        assert_eq!(fearless.name, "trait_fearless");
    }

    #[test]
    fn equip_refreshes_and_commits_placed_units_only() {
        let mut fx = Fixture::new();
        let mut hero = unit();
        let mut recalled = Unit {
            valid: false,
            ..unit()
        };

        fx.equipment().add(&mut hero, ItemNumber(7), None).unwrap();
        fx.equipment().add(&mut recalled, ItemNumber(7), None).unwrap();

        assert_eq!(fx.stats.recomputed, 2);
        assert_eq!(fx.stats.committed, vec!["hero".to_owned()]);
    }

    #[test]
    fn remove_takes_all_matches_and_honours_skip() {
        let mut fx = Fixture::new();
        let mut hero = unit();
        {
            let mut equipment = fx.equipment();
            equipment.add(&mut hero, ItemNumber(300), Some(&"helm".into())).unwrap();
            equipment.add(&mut hero, ItemNumber(300), Some(&"helm".into())).unwrap();
            equipment.add(&mut hero, ItemNumber(300), Some(&"boots".into())).unwrap();
        }
        let before = fx.stats.recomputed;

        let removed = fx
            .equipment()
            .remove(&mut hero, ItemNumber(300), Some(&"helm".into()), true);
        assert_eq!(removed.len(), 2);
        assert_eq!(fx.stats.recomputed, before);
        assert_eq!(Equipment::list(&hero).len(), 1);

        let removed = fx.equipment().remove(&mut hero, ItemNumber(300), None, false);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].category, "boots");
        assert_eq!(fx.stats.recomputed, before + 1);
        assert!(Equipment::list(&hero).is_empty());
    }

    #[test]
    fn list_skips_non_item_modifications() {
        let mut fx = Fixture::new();
        let mut hero = unit();
        hero.add_modification(Modification::Object(ObjectModification {
            id: "blessing".to_owned(),
            description: String::new(),
        }));
        fx.equipment().add(&mut hero, ItemNumber(7), None).unwrap();

        assert_eq!(hero.modifications.len(), 2);
        assert_eq!(Equipment::list(&hero).len(), 1);
    }

    #[test]
    fn regular_listing_filters_hidden_items() {
        let mut fx = Fixture::new();
        let mut hero = unit();
        {
            let mut equipment = fx.equipment();
            // sword, potion, book, two orbs, silent quest item, nameless item
            for number in [100, 16, 603, 602, 610, 700, 701] {
                equipment.add(&mut hero, ItemNumber(number), None).unwrap();
            }
        }

        let regular: Vec<u32> = Equipment::list_regular(&hero)
            .iter()
            .map(|item| item.number.0)
            .collect();
        assert_eq!(regular, vec![100, 602, 610]);
        assert_eq!(Equipment::list(&hero).len(), 7);
    }

    #[test]
    fn find_returns_first_match() {
        let mut fx = Fixture::new();
        let mut hero = unit();
        {
            let mut equipment = fx.equipment();
            equipment.add(&mut hero, ItemNumber(7), None).unwrap();
            equipment.add(&mut hero, ItemNumber(300), Some(&"helm".into())).unwrap();
        }

        assert_eq!(
            Equipment::find(&hero, &"helm".into()).map(|i| i.number),
            Some(ItemNumber(7))
        );
        assert!(Equipment::find(&hero, &"boots".into()).is_none());
    }
}
