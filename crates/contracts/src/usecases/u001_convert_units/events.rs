use serde::{Deserialize, Serialize};

/// User input delivered by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// "From" list changed
    InputUnitSelected { unit: String },

    /// "To" list changed
    OutputUnitSelected { unit: String },

    /// Raw text from the value entry
    ValueEntered { text: String },

    /// "Convert" activated
    ConvertRequested,

    /// Failure notice closed by the user
    NoticeDismissed,
}

impl SessionEvent {
    pub fn input_unit(unit: impl Into<String>) -> Self {
        Self::InputUnitSelected { unit: unit.into() }
    }

    pub fn output_unit(unit: impl Into<String>) -> Self {
        Self::OutputUnitSelected { unit: unit.into() }
    }

    pub fn value(text: impl Into<String>) -> Self {
        Self::ValueEntered { text: text.into() }
    }
}
