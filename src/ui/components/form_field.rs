use dioxus::prelude::*;

use crate::ui::theme;

/// Labelled input with its inline validation message.
#[component]
pub fn FormField(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    error: Option<String>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] inputmode: String,
    #[props(default)] disabled: bool,
) -> Element {
    let invalid = error.is_some();
    rsx! {
        div {
            label { class: theme::LABEL, "{label}" }
            input {
                class: theme::input_class(invalid),
                r#type: "{input_type}",
                inputmode: "{inputmode}",
                value: "{value}",
                placeholder: "{placeholder}",
                disabled,
                oninput: move |evt| oninput.call(evt.value()),
            }
            if let Some(message) = error {
                p { class: theme::FIELD_ERROR, "{message}" }
            }
        }
    }
}
