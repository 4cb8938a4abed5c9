//! Scenarios that drive `carte-core` the way the screens do, across crates.

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod selection;
