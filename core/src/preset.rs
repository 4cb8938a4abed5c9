//! # Preset Bundles
//!
//! A preset is a fixed list of dishes toggled as one unit, like the
//! "Chef's Menu" shortcut on the home screen.
//!
//! The bundle keeps a single `active` flag that only the bundle itself flips.
//! It is not kept in sync with the per-item selection: after activating the
//! chef's menu and then deselecting one of its dishes by hand, the bundle
//! still reads as active and its next toggle deselects whatever is left.
//! Dishes already in the wanted state are skipped.

use carte_common::menu::ItemId;
use tracing::debug;

use crate::store::MenuStore;

/// Ids of the dishes on the chef's menu: Cedar Plank Salmon, Beef Wellington
/// and Raspberry Trifle.
pub const CHEFS_MENU_IDS: [&str; 3] = ["1", "2", "4"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetBundle {
    label: String,
    ids: Vec<ItemId>,
    active: bool,
}

impl PresetBundle {
    pub fn new<I>(label: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ItemId>,
    {
        Self {
            label: label.into(),
            ids: ids.into_iter().map(Into::into).collect(),
            active: false,
        }
    }

    pub fn chefs_menu() -> Self {
        Self::new("Chef's Menu", CHEFS_MENU_IDS)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    /// Whether the bundle was last applied as "select all".
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flips the bundle and applies it to `store`. Returns the new flag.
    ///
    /// Activating selects every bundle id that is not selected yet.
    /// Deactivating deselects every bundle id that is still selected.
    pub fn toggle(&mut self, store: &mut MenuStore) -> bool {
        self.active = !self.active;

        for id in &self.ids {
            if store.is_selected(id.as_str()) != self.active {
                store.toggle_selection(id);
            }
        }

        debug!(preset = %self.label, active = self.active, "preset toggled");
        self.active
    }
}
