use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{
        validation::{is_valid_email, is_valid_phone},
        AppState, ContactDefaults, Currency,
    },
    ui::{
        components::{
            form_field::FormField,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::version::{version_label, APP_NAME, SUPPORT_EMAIL},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| st.contact.clone());
    let mut name_input = use_signal(|| initial.full_name.clone());
    let mut email_input = use_signal(|| initial.email.clone());
    let mut phone_input = use_signal(|| initial.phone.clone());
    let display = state.with(|st| st.display_currency);

    let on_currency = move |currency: Currency| {
        let mut state = state;
        state.with_mut(|st| st.display_currency = currency);
        persist_user_state(&state);
    };

    let on_apply = move |_| {
        match parse_contact(name_input(), email_input(), phone_input()) {
            Ok(contact) => {
                let mut state = state;
                state.with_mut(|st| st.contact = contact);
                persist_user_state(&state);
                push_toast(toasts, ToastKind::Success, "Saved your contact details.");
            }
            Err(message) => push_toast(toasts, ToastKind::Error, message),
        }
    };

    let on_clear = move |_| {
        name_input.set(String::new());
        email_input.set(String::new());
        phone_input.set(String::new());
        let mut state = state;
        state.with_mut(|st| st.contact = ContactDefaults::default());
        persist_user_state(&state);
        push_toast(toasts, ToastKind::Info, "Cleared saved contact details.");
    };

    rsx! {
        div { class: "space-y-8",
            section { class: theme::PANEL,
                h2 { class: theme::PANEL_HEADING, "Display currency" }
                p { class: "mt-2 text-sm text-slate-400",
                    "Prices are computed in FCFA and converted at fixed rates for display."
                }
                div { class: "mt-4 flex gap-2",
                    for currency in Currency::ALL {
                        button {
                            key: "{currency.code()}",
                            class: theme::btn_toggle(currency == display),
                            onclick: move |_| on_currency(currency),
                            "{currency.code()}"
                        }
                    }
                }
            }

            section { class: theme::PANEL,
                h2 { class: theme::PANEL_HEADING, "Contact details" }
                p { class: "mt-2 text-sm text-slate-400", "Used to prefill booking requests." }
                div { class: "mt-4 grid gap-4 sm:grid-cols-3",
                    FormField { label: "Full name", value: name_input(), oninput: move |v| name_input.set(v) }
                    FormField { label: "Email", value: email_input(), input_type: "email", oninput: move |v| email_input.set(v) }
                    FormField { label: "Phone", value: phone_input(), input_type: "tel", oninput: move |v| phone_input.set(v) }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: theme::BTN_PRIMARY, onclick: on_apply, "Save" }
                    button { class: theme::BTN_DANGER, onclick: on_clear, "Clear" }
                }
            }

            section {
                class: "flex flex-col items-center gap-2 rounded-xl border border-slate-800 bg-slate-900/40 p-6 text-center text-slate-400",
                h2 { class: theme::PANEL_HEADING, "About" }
                p { class: "text-sm", "{APP_NAME} {version_label()}" }
                p { class: "text-xs text-slate-500", "Questions? Write to {SUPPORT_EMAIL}." }
            }
        }
    }
}

/// Empty fields are allowed; filled ones must be well formed.
fn parse_contact(full_name: String, email: String, phone: String) -> Result<ContactDefaults, String> {
    let full_name = full_name.trim().to_string();
    let email = email.trim().to_string();
    let phone = phone.trim().to_string();

    if !email.is_empty() && !is_valid_email(&email) {
        return Err("Email address is not valid.".to_string());
    }
    if !phone.is_empty() && !is_valid_phone(&phone) {
        return Err("Phone number is not valid.".to_string());
    }

    Ok(ContactDefaults {
        full_name,
        email,
        phone,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_contact_is_accepted() {
        let contact = parse_contact(" ".into(), String::new(), String::new()).unwrap();
        assert_eq!(contact, ContactDefaults::default());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let err = parse_contact("Ama".into(), "ama@".into(), String::new()).unwrap_err();
        assert!(err.contains("Email"));
    }

    #[test]
    fn filled_contact_is_trimmed() {
        let contact =
            parse_contact(" Ama Mensah ".into(), "ama@example.com ".into(), String::new()).unwrap();
        assert_eq!(contact.full_name, "Ama Mensah");
        assert_eq!(contact.email, "ama@example.com");
    }
}
