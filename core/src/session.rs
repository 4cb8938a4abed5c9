//! # Session
//!
//! The context object shared by the home and review screens.
//!
//! A [`Session`] owns the [`MenuStore`], the chef's menu [`PresetBundle`] and
//! the navigation state. Screens get it by reference, and every change goes
//! through [`Session::dispatch`]. Switching screens carries no data: both
//! screens derive their view from the same store.

use carte_common::menu::{Catalog, Course, ItemId};
use tracing::debug;

use crate::preset::PresetBundle;
use crate::store::{MenuStore, StoreObserver};
use crate::views::{HomeView, ReviewView};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    /// Course carousel with the chef's menu shortcut and the cart bar.
    #[default]
    Home,
    /// The "Patron Menu": what has been chosen so far.
    Review,
}

/// Everything a user can do to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Toggle(ItemId),
    ToggleChefsMenu,
    /// Empties the selection. The chef's menu flag is left as it is.
    ClearSelection,
    NextCourse,
    PreviousCourse,
    FocusCourse(Course),
    Show(Screen),
}

pub struct Session {
    store: MenuStore,
    chefs_menu: PresetBundle,
    screen: Screen,
    focused: Course,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            store: MenuStore::new(catalog),
            chefs_menu: PresetBundle::chefs_menu(),
            screen: Screen::Home,
            focused: Course::Starter,
        }
    }

    /// Applies `action`. This is the only way to change a session.
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");

        match action {
            Action::Toggle(id) => {
                self.store.toggle_selection(id);
            }
            Action::ToggleChefsMenu => {
                self.chefs_menu.toggle(&mut self.store);
            }
            Action::ClearSelection => self.store.clear_selection(),
            Action::NextCourse => self.focused = step(self.focused, 1),
            Action::PreviousCourse => self.focused = step(self.focused, -1),
            Action::FocusCourse(course) => self.focused = course,
            Action::Show(screen) => self.screen = screen,
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.store.subscribe(observer);
    }

    pub fn store(&self) -> &MenuStore {
        &self.store
    }

    pub fn chefs_menu(&self) -> &PresetBundle {
        &self.chefs_menu
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn focused_course(&self) -> Course {
        self.focused
    }

    pub fn home(&self) -> HomeView<'_> {
        HomeView::derive(&self.store, &self.chefs_menu, self.focused)
    }

    pub fn review(&self) -> ReviewView<'_> {
        ReviewView::derive(&self.store)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Catalog::house())
    }
}

/// Moves the carousel focus, stopping at the first and last course.
fn step(course: Course, delta: isize) -> Course {
    let last = Course::COUNT - 1;
    let idx = course.index().saturating_add_signed(delta).min(last);
    Course::ALL[idx]
}
