use contracts::domain::a001_unit_registry::UnitGroup;
use leptos::prelude::*;

/// Select with one `<optgroup>` per group and a disabled placeholder option
#[component]
pub fn GroupedSelect(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value, empty while nothing is chosen
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Groups of options in display order
    #[prop(into)]
    groups: Signal<Vec<UnitGroup>>,
    /// Text of the placeholder option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();
    let placeholder_text = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class=move || format!("form__select {}", additional_class())
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <option value="" disabled=true selected=move || value.get().is_empty()>
                    {placeholder_text}
                </option>
                {move || groups.get().into_iter().map(|group| {
                    let options = group_options(&group);
                    view! {
                        <optgroup label=group.label>
                            {options.into_iter().map(|(unit, text)| {
                                let is_selected = {
                                    let unit = unit.clone();
                                    move || value.get() == unit
                                };
                                view! {
                                    <option value=unit selected=is_selected>
                                        {text}
                                    </option>
                                }
                            }).collect_view()}
                        </optgroup>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

/// (value, text) pairs of one `<optgroup>`; the unit name serves as both
fn group_options(group: &UnitGroup) -> Vec<(String, String)> {
    group
        .units
        .iter()
        .map(|unit| (unit.clone(), unit.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_options_keep_order_and_names() {
        let group = UnitGroup {
            label: "Weight".to_string(),
            units: vec!["Grams (g)".to_string(), "Kilograms (kg)".to_string()],
        };
        assert_eq!(
            group_options(&group),
            vec![
                ("Grams (g)".to_string(), "Grams (g)".to_string()),
                ("Kilograms (kg)".to_string(), "Kilograms (kg)".to_string()),
            ]
        );
    }
}
