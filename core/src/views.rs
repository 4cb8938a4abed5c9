//! Render-ready data for the two screens.
//!
//! Views borrow from the store and are rebuilt after every change; they hold
//! no state of their own.

use carte_common::menu::{Course, MenuItem, Price};

use crate::aggregate::{self, CartSummary, CourseGroup};
use crate::preset::PresetBundle;
use crate::store::MenuStore;

pub const EMPTY_COURSE_TEXT: &str = "No items in this course.";
pub const EMPTY_REVIEW_TEXT: &str = "No meals selected. Please select dish";

/// A dish on a course card together with its checkbox state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry<'a> {
    pub item: &'a MenuItem,
    pub checked: bool,
}

/// One card of the course carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard<'a> {
    pub course: Course,
    pub entries: Vec<MenuEntry<'a>>,
    /// Sum of every dish on the card, selected or not.
    pub total: Price,
}

impl CourseCard<'_> {
    pub fn empty_text(&self) -> Option<&'static str> {
        self.entries.is_empty().then_some(EMPTY_COURSE_TEXT)
    }
}

/// The browsing screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView<'a> {
    pub cards: [CourseCard<'a>; Course::COUNT],
    pub focused: Course,
    pub preset_label: &'a str,
    pub preset_active: bool,
    pub cart: CartSummary,
}

impl<'a> HomeView<'a> {
    pub fn derive(store: &'a MenuStore, preset: &'a PresetBundle, focused: Course) -> Self {
        let cards = aggregate::group_by_course(store.catalog()).map(|group| CourseCard {
            course: group.course,
            entries: group
                .items
                .into_iter()
                .map(|item| MenuEntry {
                    item,
                    checked: store.is_selected(item.id.as_str()),
                })
                .collect(),
            total: group.total,
        });

        Self {
            cards,
            focused,
            preset_label: preset.label(),
            preset_active: preset.is_active(),
            cart: CartSummary::of(store.catalog(), store.selection()),
        }
    }

    pub fn focused_card(&self) -> &CourseCard<'a> {
        &self.cards[self.focused.index()]
    }
}

/// The "Patron Menu" screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewView<'a> {
    /// Courses with at least one selected dish, in display order.
    pub sections: Vec<CourseGroup<'a>>,
    pub cart: CartSummary,
}

impl<'a> ReviewView<'a> {
    pub fn derive(store: &'a MenuStore) -> Self {
        let sections = aggregate::selected_by_course(store.catalog(), store.selection())
            .into_iter()
            .filter(|group| !group.is_empty())
            .collect();

        Self {
            sections,
            cart: CartSummary::of(store.catalog(), store.selection()),
        }
    }

    pub fn empty_text(&self) -> Option<&'static str> {
        self.cart.is_empty().then_some(EMPTY_REVIEW_TEXT)
    }
}
