#![cfg(test)]
use carte_common::menu::{Catalog, Course, Price};
use carte_core::aggregate::{self, CartSummary};
use carte_core::preset::{CHEFS_MENU_IDS, PresetBundle};
use carte_core::session::{Action, Screen, Session};
use carte_core::store::{MenuStore, SelectionSet, StoreEvent};
use carte_core::views::EMPTY_REVIEW_TEXT;
use std::cell::RefCell;
use std::rc::Rc;

use crate::fixtures;

#[test]
fn main_course_selected_scenario() -> anyhow::Result<()> {
    let mut store = MenuStore::new(fixtures::two_dish_catalog()?);
    store.toggle_selection("1");

    let subset = aggregate::selected_subset(store.catalog(), store.selection());
    let ids: Vec<&str> = subset.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["1"]);
    assert_eq!(aggregate::cart_total(subset), Price::from_units(120));

    let [starter, main, dessert] = aggregate::group_by_course(store.catalog());
    assert_eq!(starter.course, Course::Starter);
    assert_eq!(starter.total, Price::from_units(40));
    assert_eq!(main.total, Price::from_units(120));
    assert!(dessert.items.is_empty());
    assert_eq!(dessert.total, Price::ZERO);

    Ok(())
}

#[test]
fn double_toggle_returns_to_empty() -> anyhow::Result<()> {
    let mut store = MenuStore::new(fixtures::two_dish_catalog()?);

    store.toggle_selection("1");
    store.toggle_selection("1");

    assert_eq!(store.selection(), &SelectionSet::new());
    Ok(())
}

#[test]
fn empty_selection_reviews_as_zero() {
    let session = Session::default();

    let review = session.review();

    assert_eq!(review.cart, CartSummary::default());
    assert_eq!(review.cart.label(), "0 items");
    assert_eq!(review.empty_text(), Some(EMPTY_REVIEW_TEXT));
}

#[test]
fn empty_catalog_still_has_three_courses() {
    let session = Session::new(Catalog::empty());

    let home = session.home();

    assert_eq!(home.cards.len(), 3);
    for (card, course) in home.cards.iter().zip(Course::ALL) {
        assert_eq!(card.course, course);
        assert!(card.entries.is_empty());
        assert_eq!(card.total, Price::ZERO);
    }
}

#[test]
fn chefs_menu_drift_is_preserved() {
    let mut session = Session::default();

    session.dispatch(Action::ToggleChefsMenu);
    session.dispatch(Action::Toggle("4".into()));
    assert!(session.home().preset_active, "flag must not follow manual changes");

    session.dispatch(Action::ToggleChefsMenu);

    assert!(!session.chefs_menu().is_active());
    for id in CHEFS_MENU_IDS {
        assert!(!session.store().is_selected(id));
    }
}

#[test]
fn home_and_review_share_one_store() {
    let mut session = Session::default();
    session.dispatch(Action::ToggleChefsMenu);
    session.dispatch(Action::Toggle("5".into()));

    session.dispatch(Action::Show(Screen::Review));
    let review_total = session.review().cart.total;
    session.dispatch(Action::Show(Screen::Home));

    assert_eq!(session.home().cart.total, review_total);
    assert_eq!(review_total, Price::from_cents(18500 + 24500 + 8500 + 9550));
    assert_eq!(session.review().sections.len(), 3);
}

#[test]
fn observers_get_one_event_per_change() {
    let events: Rc<RefCell<Vec<StoreEvent>>> = Rc::default();
    let sink = Rc::clone(&events);

    let mut store = MenuStore::default();
    store.subscribe(Box::new(move |event: &StoreEvent| sink.borrow_mut().push(event.clone())));

    let mut preset = PresetBundle::chefs_menu();
    store.toggle_selection("2");
    preset.toggle(&mut store);

    // "2" was already selected, so the preset only adds "1" and "4".
    assert_eq!(
        *events.borrow(),
        vec![
            StoreEvent::Selected("2".into()),
            StoreEvent::Selected("1".into()),
            StoreEvent::Selected("4".into()),
        ]
    );
}
