use super::view_model::UnitConverterViewModel;
use crate::shared::components::ui::{Button, EntryKind, GroupedSelect, Input};
use contracts::domain::a001_unit_registry::UnitRegistry;
use contracts::shared::config::WidgetConfig;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_convert_units::ConvertUnits;
use leptos::prelude::*;

#[component]
pub fn UnitConverter() -> impl IntoView {
    let config = use_context::<WidgetConfig>().unwrap_or_default();
    let vm = UnitConverterViewModel::new(UnitRegistry::standard());

    let groups = Signal::derive(move || vm.unit_groups());
    let input_unit = Signal::derive(move || {
        vm.session
            .with(|s| s.input_unit().unwrap_or_default().to_string())
    });
    let output_unit = Signal::derive(move || {
        vm.session
            .with(|s| s.output_unit().unwrap_or_default().to_string())
    });
    let value_text = Signal::derive(move || vm.session.with(|s| s.value_text().to_string()));

    let display = config.display.clone();
    let result_text = move || {
        vm.session
            .with(|s| s.display_value(display.decimals, &display.empty_result))
    };
    let unit_placeholder = config.display.unit_placeholder.clone();
    let unit_text = move || {
        vm.session
            .with(|s| s.display_unit(&unit_placeholder).to_string())
    };

    let labels = config.labels;

    view! {
        <div class="converter" data-usecase=ConvertUnits::full_name()>
            <div class="converter__card">
                <h1 class="converter__title">{labels.title}</h1>
                <p class="converter__subtitle">{labels.subtitle}</p>

                <div class="converter__grid">
                    <GroupedSelect
                        id="input-unit"
                        label=labels.from
                        placeholder=labels.select_placeholder.clone()
                        value=input_unit
                        groups=groups
                        on_change=Callback::new(move |unit: String| vm.select_input_unit(unit))
                    />
                    <GroupedSelect
                        id="output-unit"
                        label=labels.to
                        placeholder=labels.select_placeholder
                        value=output_unit
                        groups=groups
                        on_change=Callback::new(move |unit: String| vm.select_output_unit(unit))
                    />
                    <Input
                        id="input-value"
                        class="converter__value"
                        label=labels.value
                        kind=EntryKind::Decimal
                        placeholder=labels.value_placeholder
                        value=value_text
                        on_input=Callback::new(move |text: String| vm.enter_value(text))
                    />
                    <Button
                        class="converter__convert"
                        on_click=Callback::new(move |_| vm.convert_command())
                    >
                        {labels.convert}
                    </Button>
                </div>

                {move || vm.session.with(|s| s.notice()).map(|notice| view! {
                    <div class="converter__notice" role="alert">
                        <span>{notice.to_string()}</span>
                        <Button
                            variant="ghost"
                            aria_label="Dismiss"
                            on_click=Callback::new(move |_| vm.dismiss_notice())
                        >
                            "×"
                        </Button>
                    </div>
                })}

                <div class="converter__result">
                    <div class="converter__result-value">{result_text}</div>
                    <div class="converter__result-unit">{unit_text}</div>
                </div>
            </div>
        </div>
    }
}
