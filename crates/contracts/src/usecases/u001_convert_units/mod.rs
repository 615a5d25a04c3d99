pub mod error;
pub mod events;
pub mod session;

pub use error::SessionError;
pub use events::SessionEvent;
pub use session::{ConverterSession, SessionPhase};

use crate::usecases::common::UseCaseMetadata;

pub struct ConvertUnits;

impl UseCaseMetadata for ConvertUnits {
    fn usecase_index() -> &'static str {
        "u001"
    }

    fn usecase_name() -> &'static str {
        "convert_units"
    }

    fn display_name() -> &'static str {
        "Unit Converter"
    }

    fn description() -> &'static str {
        "Convert values between different units."
    }
}
