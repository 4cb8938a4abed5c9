//! Types shared by every `carte` crate: the menu model, configuration and
//! logging helpers.

pub mod config;
pub mod log;
pub mod menu;

#[doc(hidden)]
pub use tracing;
