pub mod a001_unit_registry;
pub mod a002_conversion;
