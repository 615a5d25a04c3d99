use crate::domain::a002_conversion::ConversionError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a "Convert" activation, shown to the user as a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SessionError {
    #[error("Please fill all fields.")]
    IncompleteFields,

    #[error("Incompatible unit types selected.")]
    IncompatibleUnits,
}

impl From<ConversionError> for SessionError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::IncompatibleUnits { .. } => SessionError::IncompatibleUnits,
            // Registry and selection lists disagree; the pair is still not convertible
            ConversionError::UnknownUnit { .. } => {
                log::error!("{}", err);
                SessionError::IncompatibleUnits
            }
        }
    }
}
