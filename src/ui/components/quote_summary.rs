use dioxus::prelude::*;

use crate::domain::{bracket_count, format_in, Currency, Measure, Quote};

/// Price card shown next to the air and ocean calculators.
#[component]
pub fn QuoteSummary(quote: Quote, display: Currency, on_book: EventHandler<()>) -> Element {
    let split = quote.payment_split();
    let total = format_in(quote.total_amount as f64, quote.currency, display);
    let initial = format_in(split.initial_payment as f64, split.currency, display);
    let remaining = format_in(split.remaining_payment as f64, split.currency, display);
    let rate = format_in(quote.rate_per_unit as f64, quote.currency, display);

    let basis = match quote.measure {
        Measure::WeightKg(weight) => format!(
            "{weight:.2} kg billed as {:.1} kg · {} brackets × {rate}",
            quote.billable_units,
            bracket_count(quote.billable_units)
        ),
        Measure::VolumeCbm(volume) => format!("{volume:.3} m³ × {rate} per m³"),
        Measure::Pallets(count) => format!("{count} × {rate} per pallet"),
    };

    rsx! {
        div {
            class: "rounded-xl border border-emerald-500/40 bg-emerald-500/10 px-5 py-4 text-emerald-100",
            div {
                class: "flex items-center justify-between",
                span { class: "text-xs font-semibold uppercase tracking-wide", "{quote.service.label()}" }
                span { class: "text-xs opacity-80", "{quote.origin.describe()}" }
            }
            p { class: "mt-2 text-3xl font-semibold", "{total}" }
            p { class: "mt-1 text-xs opacity-80", "{basis}" }
            p { class: "mt-1 text-xs opacity-80", "Estimated transit: {quote.service.transit_estimate()}" }
            dl {
                class: "mt-4 grid grid-cols-2 gap-3 text-sm",
                div {
                    dt { class: "text-xs uppercase opacity-70", "Deposit (50%)" }
                    dd { class: "font-semibold", "{initial}" }
                }
                div {
                    dt { class: "text-xs uppercase opacity-70", "Balance on arrival" }
                    dd { class: "font-semibold", "{remaining}" }
                }
            }
            button {
                class: "mt-4 w-full rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-400",
                onclick: move |_| on_book.call(()),
                "Book this shipment"
            }
        }
    }
}
