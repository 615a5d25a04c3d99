pub mod config;
pub mod number_format;
pub mod number_parse;
