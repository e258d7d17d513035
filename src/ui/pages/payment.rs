use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{format_in, AppState},
    infra::payment::{ChargeRequest, StubPaymentGateway},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

#[component]
pub fn PaymentPage(reference: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let gateway = use_context::<StubPaymentGateway>();
    let nav = use_navigator();
    let mut busy = use_signal(|| false);

    let (display, quote, fallback_reference) = state.with(|s| {
        (
            s.display_currency,
            s.last_quote.clone(),
            s.last_booking_reference.clone(),
        )
    });
    let reference = Some(reference.trim().to_string())
        .filter(|r| !r.is_empty())
        .or(fallback_reference);

    let Some(quote) = quote else {
        return rsx! {
            section { class: "mx-auto max-w-xl space-y-4 text-center {theme::PANEL}",
                h1 { class: "text-xl font-semibold text-slate-100", "Nothing to pay yet" }
                p { class: "text-sm {theme::TEXT_MUTED}",
                    "Price a shipment with one of the calculators first, then book it."
                }
                div { class: "flex justify-center gap-3",
                    button { class: theme::BTN_PRIMARY, onclick: move |_| { nav.push(Route::AirFreight {}); }, "Air freight" }
                    button { class: theme::BTN_SECONDARY, onclick: move |_| { nav.push(Route::Ocean {}); }, "Ocean" }
                }
            }
        };
    };

    let split = quote.payment_split();
    let total = format_in(split.total() as f64, split.currency, display);
    let initial = format_in(split.initial_payment as f64, split.currency, display);
    let remaining = format_in(split.remaining_payment as f64, split.currency, display);
    let reference_label = reference.clone().unwrap_or_else(|| "not booked yet".to_string());
    let publishable_key = gateway.publishable_key();

    let on_pay = move |_| {
        if busy() {
            return;
        }
        let Some(reference) = reference.clone() else {
            push_toast(toasts, ToastKind::Warning, "Book the shipment before paying the deposit.");
            return;
        };
        let request = ChargeRequest::deposit(reference, &split);
        let gateway = gateway.clone();
        busy.set(true);
        spawn(async move {
            match gateway.charge(&request).await {
                Ok(()) => push_toast(toasts, ToastKind::Success, "Deposit paid."),
                Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "mx-auto max-w-2xl space-y-6",
            header {
                h1 { class: "text-2xl font-semibold text-slate-100", "Payment" }
                p { class: "text-sm text-slate-400",
                    "Half of the price is due now. The balance is paid when you collect your goods."
                }
            }
            section { class: "space-y-4 {theme::PANEL}",
                div { class: "flex items-center justify-between text-sm",
                    span { class: theme::TEXT_MUTED, "Booking reference" }
                    span { class: "font-mono font-semibold {theme::TEXT_SECONDARY}", "{reference_label}" }
                }
                div { class: "flex items-center justify-between text-sm",
                    span { class: theme::TEXT_MUTED, "Shipment" }
                    span { class: theme::TEXT_SECONDARY, "{quote.summary_line()}" }
                }
                dl { class: "grid grid-cols-3 gap-4 border-t border-slate-800 pt-4",
                    div {
                        dt { class: theme::LABEL, "Total" }
                        dd { class: "mt-1 text-lg font-semibold text-slate-100", "{total}" }
                    }
                    div {
                        dt { class: theme::LABEL, "Deposit due now" }
                        dd { class: "mt-1 text-lg font-semibold {theme::ACCENT_TEXT}", "{initial}" }
                    }
                    div {
                        dt { class: theme::LABEL, "Balance on arrival" }
                        dd { class: "mt-1 text-lg font-semibold text-slate-100", "{remaining}" }
                    }
                }
                div { class: "flex items-center justify-between border-t border-slate-800 pt-4",
                    span { class: "text-xs {theme::TEXT_MUTED}", "Card payments · key {publishable_key}" }
                    button {
                        class: theme::BTN_PRIMARY,
                        disabled: busy(),
                        onclick: on_pay,
                        if busy() {
                            span { class: "spinner" }
                            "Processing..."
                        } else {
                            "Pay deposit"
                        }
                    }
                }
            }
        }
    }
}
