use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{
        air::MIN_WEIGHT_KG, quote_air_freight, AirService, AppState, BookingService,
        OriginCountry,
    },
    ui::{components::quote_summary::QuoteSummary, theme},
};

#[component]
pub fn AirFreightPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let display = state.with(|s| s.display_currency);
    let nav = use_navigator();

    let mut weight_input = use_signal(String::new);
    let mut service = use_signal(|| AirService::Normal);
    let mut origin = use_signal(OriginCountry::default);

    let raw = weight_input();
    let result = if raw.trim().is_empty() {
        None
    } else {
        let weight = raw.trim().replace(',', ".").parse::<f64>().unwrap_or(f64::NAN);
        Some(quote_air_freight(weight, service(), origin()))
    };

    let (quote, error) = match result {
        Some(Ok(quote)) => (Some(quote), None),
        Some(Err(err)) => (None, Some(err)),
        None => (None, None),
    };

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-semibold text-slate-100", "Air freight estimate" }
                p { class: "text-sm text-slate-400",
                    "Weight is billed in half-kilogram brackets. Minimum chargeable weight is {MIN_WEIGHT_KG} kg."
                }
            }
            div { class: "grid gap-6 lg:grid-cols-2",
                section { class: "space-y-5 {theme::PANEL}",
                    div {
                        label { class: theme::LABEL, "Weight (kg)" }
                        input {
                            class: theme::input_class(error.is_some()),
                            r#type: "number",
                            step: "0.1",
                            min: "0",
                            inputmode: "decimal",
                            placeholder: "e.g. 2.3",
                            value: "{raw}",
                            oninput: move |evt| weight_input.set(evt.value()),
                        }
                        if let Some(err) = error.as_ref() {
                            p { class: theme::FIELD_ERROR, "{err}" }
                        }
                    }
                    div {
                        span { class: theme::LABEL, "Service" }
                        div { class: "mt-2 flex gap-2",
                            button {
                                class: theme::btn_toggle(service() == AirService::Normal),
                                onclick: move |_| service.set(AirService::Normal),
                                "Normal · 7-10 days"
                            }
                            button {
                                class: theme::btn_toggle(service() == AirService::Express),
                                onclick: move |_| service.set(AirService::Express),
                                "Express · 3-5 days"
                            }
                        }
                    }
                    OriginSelect { value: origin(), onchange: move |next| origin.set(next) }
                }
                section {
                    match quote {
                        Some(quote) => {
                            let booked = quote.clone();
                            rsx! {
                                QuoteSummary {
                                    quote,
                                    display,
                                    on_book: move |_| {
                                        state.with_mut(|s| s.record_quote(booked.clone()));
                                        nav.push(Route::booking(BookingService::AirFreight));
                                    },
                                }
                            }
                        }
                        None => rsx! { EmptyQuote { error: error.is_some() } },
                    }
                }
            }
        }
    }
}

/// Origin picker shared by the air and ocean calculators.
#[component]
pub fn OriginSelect(value: OriginCountry, onchange: EventHandler<OriginCountry>) -> Element {
    rsx! {
        div {
            label { class: theme::LABEL, "Shipping from" }
            select {
                class: theme::input_class(false),
                value: "{value.key()}",
                onchange: move |evt| {
                    if let Some(next) = OriginCountry::from_key(&evt.value()) {
                        onchange.call(next);
                    }
                },
                for country in OriginCountry::ALL {
                    option {
                        key: "{country.key()}",
                        value: "{country.key()}",
                        selected: country == value,
                        "{country.name()}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn EmptyQuote(error: bool) -> Element {
    let message = if error {
        "Fix the highlighted field to see a price."
    } else {
        "Enter your shipment details to see a price."
    };
    rsx! {
        div { class: "flex h-full min-h-[12rem] items-center justify-center rounded-xl border border-dashed border-slate-800 p-6 text-center text-sm {theme::TEXT_MUTED}",
            "{message}"
        }
    }
}
