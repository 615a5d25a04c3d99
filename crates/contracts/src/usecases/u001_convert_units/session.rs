use super::error::SessionError;
use super::events::SessionEvent;
use crate::domain::a001_unit_registry::UnitRegistry;
use crate::domain::a002_conversion::{ConversionEngine, ConversionOutcome, ConversionRequest};
use crate::shared::number_format::format_fixed;
use crate::shared::number_parse::parse_number;
use serde::{Deserialize, Serialize};

/// Where the form is between "Convert" activations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Fields incomplete, nothing converted yet
    #[default]
    Idle,
    /// Both units chosen and a value entered
    Ready,
    /// Last activation produced a result
    Converted,
    /// Last activation failed
    Rejected,
}

/// Single state record of one converter form
///
/// Changed only through [`ConverterSession::handle`]. Field edits never
/// recompute: after a conversion the previous result (or failure) stays on
/// screen until the next "Convert".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConverterSession {
    value_text: String,
    value: Option<f64>,
    input_unit: Option<String>,
    output_unit: Option<String>,
    phase: SessionPhase,
    result: Option<ConversionOutcome>,
    notice: Option<SessionError>,
}

impl ConverterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one user event and return the resulting phase
    pub fn handle(&mut self, registry: &UnitRegistry, event: SessionEvent) -> SessionPhase {
        match event {
            SessionEvent::InputUnitSelected { unit } => {
                self.input_unit = Some(unit);
                self.refresh_readiness();
            }
            SessionEvent::OutputUnitSelected { unit } => {
                self.output_unit = Some(unit);
                self.refresh_readiness();
            }
            SessionEvent::ValueEntered { text } => {
                self.value = parse_number(&text);
                self.value_text = text;
                self.refresh_readiness();
            }
            SessionEvent::ConvertRequested => self.convert(registry),
            SessionEvent::NoticeDismissed => self.notice = None,
        }
        log::debug!("session -> {:?}", self.phase);
        self.phase
    }

    /// Pending request, if every field is filled
    pub fn request(&self) -> Option<ConversionRequest> {
        match (self.value, &self.input_unit, &self.output_unit) {
            (Some(value), Some(from), Some(to)) => {
                Some(ConversionRequest::new(value, from.clone(), to.clone()))
            }
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.value.is_some() && self.input_unit.is_some() && self.output_unit.is_some()
    }

    pub fn value_text(&self) -> &str {
        &self.value_text
    }

    /// Parsed value; `None` when the entry is empty or not a number
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn input_unit(&self) -> Option<&str> {
        self.input_unit.as_deref()
    }

    pub fn output_unit(&self) -> Option<&str> {
        self.output_unit.as_deref()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn result(&self) -> Option<&ConversionOutcome> {
        self.result.as_ref()
    }

    pub fn notice(&self) -> Option<SessionError> {
        self.notice
    }

    /// Result in fixed notation, or `empty` when there is none
    pub fn display_value(&self, decimals: usize, empty: &str) -> String {
        match &self.result {
            Some(outcome) => format_fixed(outcome.value, decimals),
            None => empty.to_string(),
        }
    }

    /// Currently selected output unit, or `placeholder`
    pub fn display_unit<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.output_unit.as_deref().unwrap_or(placeholder)
    }

    // Idle <-> Ready only; a shown result or failure stays until the next Convert
    fn refresh_readiness(&mut self) {
        if matches!(self.phase, SessionPhase::Idle | SessionPhase::Ready) {
            self.phase = if self.is_complete() {
                SessionPhase::Ready
            } else {
                SessionPhase::Idle
            };
        }
    }

    fn convert(&mut self, registry: &UnitRegistry) {
        let Some(request) = self.request() else {
            self.reject(SessionError::IncompleteFields);
            return;
        };

        match ConversionEngine::new(registry).convert_request(&request) {
            Ok(outcome) => {
                self.result = Some(outcome);
                self.notice = None;
                self.phase = SessionPhase::Converted;
            }
            Err(err) => self.reject(err.into()),
        }
    }

    fn reject(&mut self, error: SessionError) {
        log::info!("conversion rejected: {}", error);
        self.result = None;
        self.notice = Some(error);
        self.phase = SessionPhase::Rejected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_unit_registry::Category;

    fn registry() -> &'static UnitRegistry {
        UnitRegistry::standard()
    }

    fn filled(value: &str, from: &str, to: &str) -> ConverterSession {
        let mut session = ConverterSession::new();
        session.handle(registry(), SessionEvent::input_unit(from));
        session.handle(registry(), SessionEvent::output_unit(to));
        session.handle(registry(), SessionEvent::value(value));
        session
    }

    #[test]
    fn test_starts_idle_with_placeholders() {
        let session = ConverterSession::new();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.display_value(2, "0"), "0");
        assert_eq!(session.display_unit("Unit"), "Unit");
        assert!(session.notice().is_none());
    }

    #[test]
    fn test_field_changes_reach_ready_without_converting() {
        let mut session = ConverterSession::new();
        assert_eq!(
            session.handle(registry(), SessionEvent::input_unit("Meters (m)")),
            SessionPhase::Idle
        );
        assert_eq!(
            session.handle(registry(), SessionEvent::output_unit("Centimeters (cm)")),
            SessionPhase::Idle
        );
        assert_eq!(
            session.handle(registry(), SessionEvent::value("5")),
            SessionPhase::Ready
        );
        assert!(session.result().is_none());
        assert_eq!(session.display_unit("Unit"), "Centimeters (cm)");
    }

    #[test]
    fn test_clearing_value_returns_to_idle() {
        let mut session = filled("5", "Meters (m)", "Centimeters (cm)");
        assert_eq!(session.handle(registry(), SessionEvent::value("")), SessionPhase::Idle);
    }

    #[test]
    fn test_convert_stores_result() {
        let mut session = filled("5", "Meters (m)", "Centimeters (cm)");
        assert_eq!(
            session.handle(registry(), SessionEvent::ConvertRequested),
            SessionPhase::Converted
        );
        assert_eq!(session.display_value(2, "0"), "500.00");
        let outcome = session.result().unwrap();
        assert_eq!(outcome.unit, "Centimeters (cm)");
        assert_eq!(outcome.category, "length");
    }

    #[test]
    fn test_incompatible_units_clear_result() {
        let mut session = filled("5", "Meters (m)", "Centimeters (cm)");
        session.handle(registry(), SessionEvent::ConvertRequested);
        session.handle(registry(), SessionEvent::output_unit("Grams (g)"));
        assert_eq!(
            session.handle(registry(), SessionEvent::ConvertRequested),
            SessionPhase::Rejected
        );
        assert_eq!(session.notice(), Some(SessionError::IncompatibleUnits));
        assert!(session.result().is_none());
        assert_eq!(session.display_value(2, "0"), "0");
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let mut session = ConverterSession::new();
        session.handle(registry(), SessionEvent::input_unit("Meters (m)"));
        session.handle(registry(), SessionEvent::output_unit("Centimeters (cm)"));
        assert_eq!(
            session.handle(registry(), SessionEvent::ConvertRequested),
            SessionPhase::Rejected
        );
        assert_eq!(session.notice(), Some(SessionError::IncompleteFields));

        let mut session = ConverterSession::new();
        session.handle(registry(), SessionEvent::value("5"));
        session.handle(registry(), SessionEvent::ConvertRequested);
        assert_eq!(session.notice(), Some(SessionError::IncompleteFields));
    }

    #[test]
    fn test_non_numeric_value_counts_as_missing() {
        let mut session = filled("abc", "Meters (m)", "Centimeters (cm)");
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.value(), None);
        assert_eq!(session.value_text(), "abc");
        session.handle(registry(), SessionEvent::ConvertRequested);
        assert_eq!(session.notice(), Some(SessionError::IncompleteFields));
    }

    #[test]
    fn test_result_stays_stale_until_next_convert() {
        let mut session = filled("5", "Meters (m)", "Centimeters (cm)");
        session.handle(registry(), SessionEvent::ConvertRequested);

        session.handle(registry(), SessionEvent::value("7"));
        session.handle(registry(), SessionEvent::output_unit("Millimeters (mm)"));
        assert_eq!(session.phase(), SessionPhase::Converted);
        assert_eq!(session.display_value(2, "0"), "500.00");

        session.handle(registry(), SessionEvent::ConvertRequested);
        assert_eq!(session.display_value(2, "0"), "7000.00");
    }

    #[test]
    fn test_rejection_stays_until_next_convert() {
        let mut session = filled("1", "Meters (m)", "Grams (g)");
        session.handle(registry(), SessionEvent::ConvertRequested);
        session.handle(registry(), SessionEvent::output_unit("Feet (ft)"));
        assert_eq!(session.phase(), SessionPhase::Rejected);

        assert_eq!(
            session.handle(registry(), SessionEvent::ConvertRequested),
            SessionPhase::Converted
        );
        assert!(session.notice().is_none());
    }

    #[test]
    fn test_dismissing_notice_keeps_phase() {
        let mut session = filled("1", "Meters (m)", "Grams (g)");
        session.handle(registry(), SessionEvent::ConvertRequested);
        session.handle(registry(), SessionEvent::NoticeDismissed);
        assert!(session.notice().is_none());
        assert_eq!(session.phase(), SessionPhase::Rejected);
        assert!(session.result().is_none());
    }

    #[test]
    fn test_unknown_unit_is_incompatible() {
        let mut session = filled("1", "Meters (m)", "Cubits");
        session.handle(registry(), SessionEvent::ConvertRequested);
        assert_eq!(session.notice(), Some(SessionError::IncompatibleUnits));
    }

    #[test]
    fn test_injected_registry() {
        let registry = UnitRegistry::new(vec![Category::new(
            "time",
            [("Seconds (s)", 1.0), ("Minutes (min)", 60.0)],
        )])
        .unwrap();
        let mut session = ConverterSession::new();
        session.handle(&registry, SessionEvent::input_unit("Minutes (min)"));
        session.handle(&registry, SessionEvent::output_unit("Seconds (s)"));
        session.handle(&registry, SessionEvent::value("1.5"));
        session.handle(&registry, SessionEvent::ConvertRequested);
        assert_eq!(session.display_value(1, "0"), "90.0");
    }
}
