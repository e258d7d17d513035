use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    app::Route,
    domain::{
        booking::{BOOKINGS_EMAIL, MAX_PASSENGERS},
        error_for, AppState, BookingRequest, BookingService, FieldError,
    },
    infra::backend::{BookingReceipt, MockBackend},
    ui::{
        components::{
            form_field::FormField,
            toast::{push_toast, push_validation_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn BookingPage(service: String) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let backend = use_context::<MockBackend>();
    let nav = use_navigator();

    let mut form = use_signal(|| {
        let contact = state.with(|s| s.contact.clone());
        BookingRequest {
            full_name: contact.full_name,
            email: contact.email,
            phone: contact.phone,
            service: BookingService::from_slug(&service).unwrap_or_default(),
            passengers: "1".to_string(),
            ..BookingRequest::default()
        }
    });
    let mut errors = use_signal(Vec::<FieldError>::new);
    let mut busy = use_signal(|| false);
    let mut receipt = use_signal(|| None::<BookingReceipt>);

    let today = OffsetDateTime::now_utc().date();
    let current = form();
    let field_errors = errors();
    let error = |field: &str| error_for(&field_errors, field).map(str::to_string);

    let on_submit = move |_| {
        if busy() {
            return;
        }
        let request = form();
        if let Err(found) = request.validate(today) {
            push_validation_toast(toasts, &found);
            errors.set(found);
            return;
        }
        errors.set(Vec::new());
        busy.set(true);

        let backend = backend.clone();
        spawn(async move {
            let issued = backend.submit_booking(&request).await;
            open_mail_client(&issued.mailto);
            state.with_mut(|s| s.record_booking(request.service, issued.reference.clone()));
            push_toast(
                toasts,
                ToastKind::Success,
                format!("Booking {} prepared. Send the e-mail to confirm it.", issued.reference),
            );
            receipt.set(Some(issued));
            busy.set(false);
        });
    };

    let on_new = move |_| {
        receipt.set(None);
        form.with_mut(|f| {
            f.cargo_description.clear();
            f.preferred_date.clear();
        });
    };

    if let Some(done) = receipt() {
        let reference = done.reference.clone();
        return rsx! {
            section { class: "mx-auto max-w-xl space-y-4 text-center {theme::PANEL}",
                p { class: "text-4xl", "📨" }
                h1 { class: "text-2xl font-semibold text-slate-100", "Booking request ready" }
                p { class: "text-sm {theme::TEXT_SECONDARY}",
                    "Your reference is "
                    span { class: "font-mono font-semibold {theme::ACCENT_TEXT}", "{done.reference}" }
                    ". Your mail client should open with the request addressed to {BOOKINGS_EMAIL}."
                }
                a { class: theme::LINK, href: "{done.mailto}", "Open the e-mail again" }
                div { class: "flex justify-center gap-3 pt-2",
                    button {
                        class: theme::BTN_PRIMARY,
                        onclick: move |_| {
                            nav.push(Route::Payment { reference: reference.clone() });
                        },
                        "Continue to payment"
                    }
                    button { class: theme::BTN_SECONDARY, onclick: on_new, "New booking" }
                }
            }
        };
    }

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-semibold text-slate-100", "Book a shipment" }
                p { class: "text-sm text-slate-400",
                    "We confirm every request by e-mail within one business day."
                }
            }
            section { class: "space-y-5 {theme::PANEL}",
                div {
                    span { class: theme::LABEL, "Service" }
                    div { class: "mt-2 flex flex-wrap gap-2",
                        for choice in BookingService::ALL {
                            button {
                                key: "{choice.slug()}",
                                class: theme::btn_toggle(current.service == choice),
                                onclick: move |_| form.with_mut(|f| f.service = choice),
                                "{choice.label()}"
                            }
                        }
                    }
                }
                div { class: "grid gap-4 sm:grid-cols-2",
                    FormField {
                        label: "Full name",
                        value: current.full_name.clone(),
                        error: error("full_name"),
                        oninput: move |v| form.with_mut(|f| f.full_name = v),
                    }
                    FormField {
                        label: "Email",
                        value: current.email.clone(),
                        error: error("email"),
                        input_type: "email",
                        oninput: move |v| form.with_mut(|f| f.email = v),
                    }
                    FormField {
                        label: "Phone",
                        value: current.phone.clone(),
                        error: error("phone"),
                        input_type: "tel",
                        placeholder: "+228 90 00 00 00",
                        oninput: move |v| form.with_mut(|f| f.phone = v),
                    }
                    FormField {
                        label: "Preferred date",
                        value: current.preferred_date.clone(),
                        error: error("preferred_date"),
                        input_type: "date",
                        oninput: move |v| form.with_mut(|f| f.preferred_date = v),
                    }
                    FormField {
                        label: "From",
                        value: current.origin.clone(),
                        error: error("origin"),
                        placeholder: "City or port",
                        oninput: move |v| form.with_mut(|f| f.origin = v),
                    }
                    FormField {
                        label: "To",
                        value: current.destination.clone(),
                        error: error("destination"),
                        placeholder: "City or port",
                        oninput: move |v| form.with_mut(|f| f.destination = v),
                    }
                }
                if current.service.carries_passengers() {
                    FormField {
                        label: "Passengers (1-{MAX_PASSENGERS})",
                        value: current.passengers.clone(),
                        error: error("passengers"),
                        input_type: "number",
                        inputmode: "numeric",
                        oninput: move |v| form.with_mut(|f| f.passengers = v),
                    }
                } else {
                    div {
                        label { class: theme::LABEL, "Cargo description" }
                        textarea {
                            class: theme::input_class(error("cargo_description").is_some()),
                            rows: "3",
                            placeholder: "What are you shipping? Quantity, packaging, value...",
                            value: "{current.cargo_description}",
                            oninput: move |evt| form.with_mut(|f| f.cargo_description = evt.value()),
                        }
                        if let Some(message) = error("cargo_description") {
                            p { class: theme::FIELD_ERROR, "{message}" }
                        }
                    }
                }
                div { class: "flex justify-end",
                    button {
                        class: theme::BTN_PRIMARY,
                        disabled: busy(),
                        onclick: on_submit,
                        if busy() {
                            span { class: "spinner" }
                            "Sending..."
                        } else {
                            "Send booking request"
                        }
                    }
                }
            }
        }
    }
}

fn open_mail_client(mailto: &str) {
    let target = serde_json::to_string(mailto).unwrap_or_else(|_| "\"\"".to_string());
    let eval = document::eval(&format!("window.location.href = {target};"));
    spawn(async move {
        if let Err(err) = eval.await {
            tracing::warn!("could not open the mail client: {err}");
        }
    });
}
