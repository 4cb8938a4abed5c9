//! # Menu Store
//!
//! Owns the immutable [`Catalog`] and the mutable [`SelectionSet`], and is the
//! only writer of the selection.
//!
//! Every mutation is reported to the subscribed [`StoreObserver`]s
//! synchronously, before the mutating call returns.

use std::collections::HashSet;
use std::collections::hash_set;

use carte_common::menu::{Catalog, ItemId, MenuItem};
use tracing::debug;

/// The set of item ids the patron has currently chosen.
///
/// Membership only, no ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<ItemId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Adds `id` if absent, removes it if present. Returns the new membership.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        if self.ids.remove(id.as_str()) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Empties the set, returning how many ids were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.ids.len();
        self.ids.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, ItemId> {
        self.ids.iter()
    }
}

impl<I: Into<ItemId>> FromIterator<I> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a ItemId;
    type IntoIter = hash_set::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

/// A change made to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Selected(ItemId),
    Deselected(ItemId),
    /// The selection was emptied; `count` ids were removed.
    Cleared { count: usize },
}

/// Something that re-derives its state whenever the selection changes.
pub trait StoreObserver {
    fn on_event(&self, event: &StoreEvent);
}

impl<F> StoreObserver for F
where
    F: Fn(&StoreEvent),
{
    fn on_event(&self, event: &StoreEvent) {
        self(event)
    }
}

pub struct MenuStore {
    catalog: Catalog,
    selection: SelectionSet,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl MenuStore {
    /// Creates a store with an empty selection.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: SelectionSet::new(),
            observers: Vec::new(),
        }
    }

    /// The full catalog, in load order.
    pub fn catalog(&self) -> &[MenuItem] {
        self.catalog.items()
    }

    /// Looks a dish up by id. `None` for ids the catalog does not know.
    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.catalog.get(id)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Unknown ids are simply not selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Flips membership of `id` and notifies observers.
    ///
    /// The id is not checked against the catalog: an id the catalog does not
    /// know is tracked like any other and has no visible effect.
    pub fn toggle_selection(&mut self, id: impl Into<ItemId>) -> bool {
        let id: ItemId = id.into();
        let selected = self.selection.toggle(id.clone());

        debug!(%id, selected, known = self.catalog.contains(id.as_str()), "selection toggled");

        let event = if selected {
            StoreEvent::Selected(id)
        } else {
            StoreEvent::Deselected(id)
        };
        self.notify(&event);

        selected
    }

    /// Empties the selection and notifies observers, even when it was already empty.
    pub fn clear_selection(&mut self) {
        let count = self.selection.clear();
        debug!(count, "selection cleared");
        self.notify(&StoreEvent::Cleared { count });
    }

    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    fn notify(&self, event: &StoreEvent) {
        for observer in &self.observers {
            observer.on_event(event);
        }
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new(Catalog::house())
    }
}
