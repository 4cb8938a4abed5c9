#![cfg(test)]
use carte_common::menu::{Catalog, Course, MenuItem, Price};
use carte_core::aggregate;
use carte_core::preset::PresetBundle;
use carte_core::store::MenuStore;
use proptest::prelude::*;

use crate::fixtures::{arb_catalog, arb_toggles};

fn store_with(items: Vec<MenuItem>, toggles: &[String]) -> MenuStore {
    let catalog = Catalog::new(items).expect("generated ids are unique");
    let mut store = MenuStore::new(catalog);
    for id in toggles {
        store.toggle_selection(id.as_str());
    }
    store
}

proptest! {
    #[test]
    fn cart_total_matches_selected_prices(items in arb_catalog(), toggles in arb_toggles()) {
        let store = store_with(items, &toggles);

        let expected: Price = store
            .catalog()
            .iter()
            .rev()
            .filter(|item| store.is_selected(item.id.as_str()))
            .map(|item| item.price)
            .sum();
        let subset = aggregate::selected_subset(store.catalog(), store.selection());

        prop_assert_eq!(aggregate::cart_total(subset), expected);
    }

    #[test]
    fn toggling_twice_is_a_no_op(items in arb_catalog(), toggles in arb_toggles(), id in "[0-9]{1,2}") {
        let mut store = store_with(items, &toggles);
        let before = store.selection().clone();

        store.toggle_selection(id.as_str());
        store.toggle_selection(id.as_str());

        prop_assert_eq!(store.selection(), &before);
    }

    #[test]
    fn toggle_order_does_not_matter(items in arb_catalog(), toggles in arb_toggles()) {
        let reversed: Vec<String> = toggles.iter().rev().cloned().collect();

        let forward = store_with(items.clone(), &toggles);
        let backward = store_with(items, &reversed);

        prop_assert_eq!(forward.selection(), backward.selection());
    }

    #[test]
    fn always_three_groups_in_display_order(items in arb_catalog()) {
        let groups = aggregate::group_by_course(&items);

        let courses: Vec<Course> = groups.iter().map(|group| group.course).collect();
        prop_assert_eq!(courses, Course::ALL.to_vec());

        let grouped: usize = groups.iter().map(|group| group.items.len()).sum();
        prop_assert_eq!(grouped, items.len());
        for group in &groups {
            prop_assert_eq!(group.total, aggregate::cart_total(group.items.iter().copied()));
        }
    }

    #[test]
    fn preset_round_trip_restores_selection(
        items in arb_catalog(),
        toggles in arb_toggles(),
        bundle in prop::collection::vec("[0-9]{1,2}", 0..5),
    ) {
        // Bundle dishes picked by hand beforehand would be dropped on deactivation.
        let toggles: Vec<String> = toggles.into_iter().filter(|id| !bundle.contains(id)).collect();
        let mut store = store_with(items, &toggles);
        let before = store.selection().clone();
        let mut preset = PresetBundle::new("Specials", bundle.iter().map(String::as_str));

        prop_assert!(preset.toggle(&mut store));
        prop_assert!(!preset.toggle(&mut store));

        prop_assert_eq!(store.selection(), &before);
    }
}
