use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConversionError {
    /// Unit is not registered under the category; UI lists are built from the
    /// registry, so this only shows up when the two disagree.
    #[error("unknown unit '{unit}' in category '{category}'")]
    UnknownUnit { category: String, unit: String },

    /// No single category lists both units
    #[error("incompatible units '{from}' and '{to}'")]
    IncompatibleUnits { from: String, to: String },
}
