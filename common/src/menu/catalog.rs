//! # Catalog
//!
//! The fixed list of dishes available for a session.
//!
//! A catalog is validated once at construction: ids are non-empty and unique.
//! After that it never changes, and its order is the order dishes are shown in.

use std::collections::HashSet;

use tracing::debug;

use crate::menu::{Course, ItemId, MenuError, MenuItem, Price};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty or duplicate ids.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());

        for item in &items {
            if item.id.is_empty() {
                return Err(MenuError::EmptyId);
            }
            if !seen.insert(item.id.as_str()) {
                return Err(MenuError::DuplicateId(item.id.to_string()));
            }
        }

        debug!(items = items.len(), "catalog loaded");
        Ok(Self { items })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The restaurant's own menu.
    ///
    /// Contains the chef's specials `1`, `2` and `4`.
    pub fn house() -> Self {
        let items = vec![
            MenuItem::new(
                "1",
                "Cedar Plank Salmon",
                "Oven-roasted salmon on cedar with lemon butter and charred greens",
                Price::from_units(185),
                Course::Main,
            ),
            MenuItem::new(
                "2",
                "Beef Wellington",
                "Fillet wrapped in mushroom duxelles and golden puff pastry",
                Price::from_units(245),
                Course::Main,
            ),
            MenuItem::new(
                "3",
                "Roasted Tomato Bisque",
                "Slow-roasted tomatoes, basil oil and a parmesan crisp",
                Price::from_units(65),
                Course::Starter,
            ),
            MenuItem::new(
                "4",
                "Raspberry Trifle",
                "Layers of sponge, vanilla custard, fresh raspberries and cream",
                Price::from_units(85),
                Course::Dessert,
            ),
            MenuItem::new(
                "5",
                "Burrata and Heirloom Tomato",
                "Creamy burrata, heirloom tomatoes and aged balsamic",
                Price::from_cents(9550),
                Course::Starter,
            ),
            MenuItem::new(
                "6",
                "Dark Chocolate Fondant",
                "Molten centre, salted caramel and vanilla bean ice cream",
                Price::from_units(90),
                Course::Dessert,
            ),
        ];

        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter().map(|item| &item.id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
