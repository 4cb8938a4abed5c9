//! Grouping and totalling.
//!
//! Everything here is a pure function of its inputs and is recomputed on
//! every render; nothing is cached.

use carte_common::menu::{Course, MenuItem, Price};

use crate::store::SelectionSet;

/// The dishes of one course and what they add up to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseGroup<'a> {
    pub course: Course,
    pub items: Vec<&'a MenuItem>,
    pub total: Price,
}

impl CourseGroup<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partitions `items` into one group per course, in display order.
///
/// Always yields every course, even when it has no items.
pub fn group_by_course<'a, I>(items: I) -> [CourseGroup<'a>; Course::COUNT]
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let mut groups = Course::ALL.map(|course| CourseGroup {
        course,
        items: Vec::new(),
        total: Price::ZERO,
    });

    for item in items {
        let group = &mut groups[item.course.index()];
        group.items.push(item);
        group.total += item.price;
    }

    groups
}

/// Catalog items whose id is selected, in catalog order.
pub fn selected_subset<'a>(catalog: &'a [MenuItem], selection: &SelectionSet) -> Vec<&'a MenuItem> {
    catalog
        .iter()
        .filter(|item| selection.contains(item.id.as_str()))
        .collect()
}

pub fn cart_total<'a, I>(items: I) -> Price
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    items.into_iter().map(|item| item.price).sum()
}

/// The selected dishes grouped by course.
pub fn selected_by_course<'a>(
    catalog: &'a [MenuItem],
    selection: &SelectionSet,
) -> [CourseGroup<'a>; Course::COUNT] {
    group_by_course(selected_subset(catalog, selection))
}

/// Count and total of the selected dishes.
///
/// Ids that are selected but not in the catalog do not count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartSummary {
    pub count: usize,
    pub total: Price,
}

impl CartSummary {
    pub fn of(catalog: &[MenuItem], selection: &SelectionSet) -> Self {
        let selected = selected_subset(catalog, selection);
        Self {
            count: selected.len(),
            total: cart_total(selected),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `"1 item"`, `"3 items"`.
    pub fn label(&self) -> String {
        let unit = if self.count == 1 { "item" } else { "items" };
        format!("{} {}", self.count, unit)
    }
}
