use contracts::domain::a001_unit_registry::{UnitGroup, UnitRegistry};
use contracts::usecases::u001_convert_units::{ConverterSession, SessionEvent};
use leptos::prelude::*;

/// ViewModel for the converter form
///
/// All state lives in one `ConverterSession`; every command turns into a
/// `SessionEvent` handled against the injected registry.
#[derive(Clone, Copy)]
pub struct UnitConverterViewModel {
    pub session: RwSignal<ConverterSession>,
    registry: &'static UnitRegistry,
}

impl UnitConverterViewModel {
    pub fn new(registry: &'static UnitRegistry) -> Self {
        Self {
            session: RwSignal::new(ConverterSession::new()),
            registry,
        }
    }

    pub fn unit_groups(&self) -> Vec<UnitGroup> {
        self.registry.unit_groups()
    }

    pub fn select_input_unit(&self, unit: String) {
        self.dispatch(SessionEvent::InputUnitSelected { unit });
    }

    pub fn select_output_unit(&self, unit: String) {
        self.dispatch(SessionEvent::OutputUnitSelected { unit });
    }

    pub fn enter_value(&self, text: String) {
        self.dispatch(SessionEvent::ValueEntered { text });
    }

    pub fn convert_command(&self) {
        self.dispatch(SessionEvent::ConvertRequested);
    }

    pub fn dismiss_notice(&self) {
        self.dispatch(SessionEvent::NoticeDismissed);
    }

    fn dispatch(&self, event: SessionEvent) {
        let registry = self.registry;
        self.session.update(|session| {
            session.handle(registry, event);
        });
    }
}
