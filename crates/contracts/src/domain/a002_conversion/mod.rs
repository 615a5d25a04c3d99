//! Linear conversion through each category's base unit

pub mod engine;
pub mod error;

pub use engine::{ConversionEngine, ConversionOutcome, ConversionRequest};
pub use error::ConversionError;
