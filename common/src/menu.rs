//! # Menu Model
//!
//! The data the whole application is built around.
//!
//! * [`item::MenuItem`]: a single dish offered by the restaurant.
//! * [`course::Course`]: the fixed set of courses dishes are grouped by.
//! * [`price::Price`]: a non-negative amount in minor units.
//! * [`catalog::Catalog`]: the validated, ordered list of dishes for a session.

pub mod catalog;
pub mod course;
pub mod error;
pub mod item;
pub mod price;

pub use catalog::Catalog;
pub use course::Course;
pub use error::MenuError;
pub use item::{ItemId, MenuItem};
pub use price::Price;
