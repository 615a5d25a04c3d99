pub mod common;
pub mod u001_convert_units;
