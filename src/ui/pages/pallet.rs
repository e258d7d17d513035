use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{
        pallet::MAX_PALLETS, quote_pallet, AppState, BookingService, PalletRequest, PalletType,
        PORTS,
    },
    ui::{components::fare_table::FareTable, theme},
};

#[component]
pub fn PalletPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let display = state.with(|s| s.display_currency);
    let nav = use_navigator();

    let mut departure = use_signal(|| "BEANR".to_string());
    let mut arrival = use_signal(|| "TGLFW".to_string());
    let mut pallet_type = use_signal(PalletType::default);
    let mut count_input = use_signal(|| "1".to_string());

    let request = PalletRequest {
        departure: departure(),
        arrival: arrival(),
        pallet_type: pallet_type(),
        count: count_input().trim().parse().unwrap_or(0),
    };
    let result = quote_pallet(&request);

    let swap = move |_| {
        let from = departure();
        departure.set(arrival());
        arrival.set(from);
    };

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-semibold text-slate-100", "Pallet fare calculator" }
                p { class: "text-sm text-slate-400",
                    "Published lane rates where we have them, distance-based estimates elsewhere. "
                    "All fares include our 10% volume discount."
                }
            }
            section { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4 {theme::PANEL}",
                PortSelect { label: "Departure port", value: departure(), onchange: move |code| departure.set(code) }
                PortSelect { label: "Arrival port", value: arrival(), onchange: move |code| arrival.set(code) }
                div {
                    label { class: theme::LABEL, "Pallet type" }
                    select {
                        class: theme::input_class(false),
                        onchange: move |evt| {
                            if let Some(kind) = PalletType::from_key(&evt.value()) {
                                pallet_type.set(kind);
                            }
                        },
                        for kind in PalletType::ALL {
                            option {
                                key: "{kind.key()}",
                                value: "{kind.key()}",
                                selected: kind == pallet_type(),
                                "{kind.label()}"
                            }
                        }
                    }
                }
                div {
                    label { class: theme::LABEL, "Pallets (1-{MAX_PALLETS})" }
                    input {
                        class: theme::input_class(false),
                        r#type: "number",
                        min: "1",
                        max: "{MAX_PALLETS}",
                        inputmode: "numeric",
                        value: "{count_input}",
                        oninput: move |evt| count_input.set(evt.value()),
                    }
                }
                div { class: "sm:col-span-2 lg:col-span-4",
                    button { class: theme::BTN_SECONDARY, onclick: swap, "⇄ Swap ports" }
                }
            }
            match result {
                Ok(fare) => {
                    let booked = fare.to_quote(&request);
                    rsx! {
                        FareTable { fare, display }
                        div { class: "flex justify-end",
                            button {
                                class: theme::BTN_PRIMARY,
                                onclick: move |_| {
                                    state.with_mut(|s| s.record_quote(booked.clone()));
                                    nav.push(Route::booking(BookingService::Pallet));
                                },
                                "Book these pallets"
                            }
                        }
                    }
                }
                Err(err) => rsx! {
                    div { class: "rounded-xl border border-rose-500/40 bg-rose-500/10 px-5 py-4 text-sm text-rose-200",
                        "{err}"
                    }
                },
            }
        }
    }
}

#[component]
fn PortSelect(label: &'static str, value: String, onchange: EventHandler<String>) -> Element {
    rsx! {
        div {
            label { class: theme::LABEL, "{label}" }
            select {
                class: theme::input_class(false),
                onchange: move |evt| onchange.call(evt.value()),
                for port in PORTS.iter() {
                    option {
                        key: "{port.code}",
                        value: "{port.code}",
                        selected: port.code == value,
                        "{port.name}, {port.country} ({port.code})"
                    }
                }
            }
        }
    }
}
