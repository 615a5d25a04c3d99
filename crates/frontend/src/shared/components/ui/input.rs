use leptos::prelude::*;

/// How the browser should treat the typed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    #[default]
    Text,
    /// Decimal keypad on touch devices, any step accepted
    Decimal,
}

impl EntryKind {
    fn input_type(self) -> &'static str {
        match self {
            EntryKind::Text => "text",
            EntryKind::Decimal => "number",
        }
    }

    fn input_mode(self) -> Option<&'static str> {
        match self {
            EntryKind::Text => None,
            EntryKind::Decimal => Some("decimal"),
        }
    }

    fn step(self) -> Option<&'static str> {
        match self {
            EntryKind::Text => None,
            EntryKind::Decimal => Some("any"),
        }
    }
}

/// Labelled text entry that reports the raw text on every keystroke
///
/// No parsing happens here; the receiver decides what the text means.
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Text shown in the entry
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    kind: EntryKind,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Extra classes on the wrapping group
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let entry_id = move || id.get().unwrap_or_default();
    let group_class = move || format!("form__group {}", class.get().unwrap_or_default());

    view! {
        <div class=group_class>
            {move || label.get().map(|text| view! {
                <label class="form__label" for=entry_id>{text}</label>
            })}
            <input
                id=entry_id
                class="form__input"
                type=kind.input_type()
                inputmode=kind.input_mode()
                step=kind.step()
                prop:value=move || value.get()
                placeholder=move || placeholder.get()
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_attributes() {
        assert_eq!(EntryKind::default(), EntryKind::Text);
        assert_eq!(EntryKind::Text.input_type(), "text");
        assert_eq!(EntryKind::Text.input_mode(), None);
        assert_eq!(EntryKind::Decimal.input_type(), "number");
        assert_eq!(EntryKind::Decimal.input_mode(), Some("decimal"));
        assert_eq!(EntryKind::Decimal.step(), Some("any"));
    }
}
