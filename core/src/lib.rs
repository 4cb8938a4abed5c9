//! # carte-core
//!
//! The state model behind the menu screens.
//!
//! * **[`store`]**: the catalog and the selection set, the single source of truth.
//! * **[`aggregate`]**: pure grouping and totalling over the catalog.
//! * **[`preset`]**: bundles of dishes toggled as one unit (the chef's menu).
//! * **[`session`]**: the context object both screens read, mutated through one entry point.
//! * **[`views`]**: render-ready data for the home and review screens.

pub mod aggregate;
pub mod preset;
pub mod session;
pub mod store;
pub mod views;
