use dioxus::prelude::*;

use crate::app::{persist_user_state, Route};
use crate::domain::{AppState, Currency};
use crate::util::version::{version_label, APP_NAME, SUPPORT_EMAIL};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let display = state.with(|s| s.display_currency);
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let mut state_mut = state;
    let mut set_currency = move |currency: Currency| {
        state_mut.with_mut(|s| s.display_currency = currency);
        persist_user_state(&state_mut);
    };

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-sky-900/40 bg-slate-950/90 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-6xl flex-wrap items-center justify-between gap-4",
                    // Left: brand
                    button {
                        class: "flex items-center gap-3 text-left",
                        onclick: move |_| { nav.push(Route::Home {}); },
                        span { class: "text-2xl", "🚢" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight text-sky-200", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500 italic", "air · ocean · pallets · passengers" }
                        }
                    }

                    // Center: navigation
                    nav { class: "flex flex-wrap gap-2 text-sm",
                        NavButton { active: matches!(current_route, Route::AirFreight {}), onclick: move |_| { nav.push(Route::AirFreight {}); }, label: "✈️ Air" }
                        NavButton { active: matches!(current_route, Route::Ocean {}), onclick: move |_| { nav.push(Route::Ocean {}); }, label: "🚢 Ocean" }
                        NavButton { active: matches!(current_route, Route::Pallet {}), onclick: move |_| { nav.push(Route::Pallet {}); }, label: "📦 Pallets" }
                        NavButton { active: matches!(current_route, Route::Booking { .. }), onclick: move |_| { nav.push(Route::Booking { service: String::new() }); }, label: "📝 Book" }
                        NavButton { active: matches!(current_route, Route::SupplierPayment {}), onclick: move |_| { nav.push(Route::SupplierPayment {}); }, label: "💳 Pay a supplier" }
                        NavButton { active: matches!(current_route, Route::Tracking { .. }), onclick: move |_| { nav.push(Route::Tracking { number: String::new() }); }, label: "📍 Track" }
                        NavButton { active: matches!(current_route, Route::Dashboard {}), onclick: move |_| { nav.push(Route::Dashboard {}); }, label: "📊 Dashboard" }
                        NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️" }
                    }

                    // Right: display currency
                    div { class: "flex gap-1",
                        for currency in Currency::ALL {
                            CurrencyButton {
                                key: "{currency.code()}",
                                active: display == currency,
                                onclick: move |_| set_currency(currency),
                                currency,
                            }
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "border-t border-slate-900 px-6 py-6 text-center text-xs text-slate-600",
                "{APP_NAME} {version_label()} · Prices are estimates until confirmed by our agents · {SUPPORT_EMAIL}"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "rounded-lg border border-sky-500/60 bg-sky-500/15 px-3 py-2 font-semibold text-sky-300"
    } else {
        "rounded-lg border border-slate-700 px-3 py-2 text-slate-400 transition hover:border-sky-700 hover:bg-sky-900/20 hover:text-sky-300"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}

#[component]
fn CurrencyButton(active: bool, onclick: EventHandler<()>, currency: Currency) -> Element {
    let class = if active {
        "min-w-[3.5rem] rounded-lg px-3 py-1.5 text-xs font-semibold bg-emerald-500/20 text-emerald-300 border border-emerald-500/40"
    } else {
        "min-w-[3.5rem] rounded-lg px-3 py-1.5 text-xs text-slate-500 border border-slate-800 hover:border-emerald-600 hover:text-emerald-400 transition"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{currency.code()}"
        }
    }
}
