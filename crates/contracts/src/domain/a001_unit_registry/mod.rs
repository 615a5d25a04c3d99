//! Unit registry: categories, their ordered units and conversion factors
//!
//! - category.rs: Category and UnitDef (one factor per display name)
//! - registry.rs: validated, immutable UnitRegistry and lookups
//! - standard.rs: built-in length / weight / volume data

pub mod category;
pub mod registry;
pub mod standard;

pub use category::{Category, UnitDef, UnitGroup};
pub use registry::{RegistryError, UnitRegistry};
