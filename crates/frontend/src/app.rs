use crate::usecases::u001_convert_units::UnitConverter;
use contracts::shared::config::WidgetConfig;
use leptos::prelude::*;

/// Compiled-in widget settings; edit `widget.toml` to change labels or precision
const WIDGET_CONFIG: &str = include_str!("../widget.toml");

#[component]
pub fn App() -> impl IntoView {
    provide_context(WidgetConfig::load(Some(WIDGET_CONFIG)));

    view! {
        <UnitConverter />
    }
}
