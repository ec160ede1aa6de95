//! `katas-catalog` — every unit in one place.
//!
//! Units know nothing about each other. This crate lists them in catalog
//! order, resolves user queries to a unit, and runs a chosen variant against
//! an input without the caller knowing the unit's entry-point type.

pub mod input;
pub mod registry;
pub mod runner;

pub use input::Input;
pub use registry::{find, units};
pub use runner::{Comparison, compare, run};
