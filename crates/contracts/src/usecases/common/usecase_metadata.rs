/// Identification of a UseCase for the UI and logs
pub trait UseCaseMetadata {
    /// Index, e.g. "u001"
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "convert_units"
    fn usecase_name() -> &'static str;

    /// Human readable name
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u001_convert_units"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
