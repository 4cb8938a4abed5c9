use carte_common::menu::{Catalog, Course, MenuItem, Price};
use proptest::prelude::*;

/// Largest catalog the property tests generate.
pub const MAX_DISHES: usize = 12;

pub fn dish(id: &str, course: Course, units: u64) -> MenuItem {
    MenuItem::new(id, format!("Dish {id}"), "", Price::from_units(units), course)
}

/// `[{1, Main, 120}, {2, Starter, 40}]`
pub fn two_dish_catalog() -> anyhow::Result<Catalog> {
    Ok(Catalog::new(vec![
        dish("1", Course::Main, 120),
        dish("2", Course::Starter, 40),
    ])?)
}

pub fn arb_course() -> impl Strategy<Value = Course> {
    prop_oneof![
        Just(Course::Starter),
        Just(Course::Main),
        Just(Course::Dessert),
    ]
}

/// Catalogs with ids `"0"`, `"1"`, ... so they are unique by construction.
pub fn arb_catalog() -> impl Strategy<Value = Vec<MenuItem>> {
    prop::collection::vec((arb_course(), 0u64..100_000), 0..MAX_DISHES).prop_map(|dishes| {
        dishes
            .into_iter()
            .enumerate()
            .map(|(idx, (course, cents))| {
                MenuItem::new(
                    idx.to_string(),
                    format!("Dish {idx}"),
                    "",
                    Price::from_cents(cents),
                    course,
                )
            })
            .collect()
    })
}

/// Ids to toggle, including some the generated catalogs never contain.
pub fn arb_toggles() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec((0..MAX_DISHES + 4).prop_map(|idx| idx.to_string()), 0..24)
}
