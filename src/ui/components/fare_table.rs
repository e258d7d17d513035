use dioxus::prelude::*;

use crate::domain::{Currency, PalletFare};
use crate::ui::theme;

/// Pallet fare in every display currency, the preferred one first.
#[component]
pub fn FareTable(fare: PalletFare, display: Currency) -> Element {
    let mut currencies = Currency::ALL.to_vec();
    currencies.sort_by_key(|currency| *currency != display);

    let distance = fare
        .distance_km
        .map(|km| format!("{km:.0} km"))
        .unwrap_or_else(|| "n/a".to_string());
    let base_rate = Currency::Eur.format(fare.base_rate_eur);

    rsx! {
        div {
            class: theme::TABLE_CONTAINER,
            div {
                class: "grid gap-4 border-b border-slate-800 bg-slate-900/60 px-4 py-3 text-sm text-slate-200 sm:grid-cols-3",
                div {
                    p { class: "text-xs uppercase text-slate-500", "Pricing" }
                    p { class: "font-medium", "{fare.method.describe()}" }
                }
                div {
                    p { class: "text-xs uppercase text-slate-500", "Distance" }
                    p { class: "font-medium", "{distance}" }
                }
                div {
                    p { class: "text-xs uppercase text-slate-500", "Lane rate per pallet" }
                    p { class: "font-medium", "{base_rate}" }
                }
            }
            table {
                class: "min-w-full {theme::TABLE_DIVIDER} text-sm",
                thead {
                    class: theme::TABLE_HEADER,
                    tr {
                        th { class: "px-4 py-3 font-medium", "Currency" }
                        th { class: "px-4 py-3 font-medium text-right", "Total" }
                    }
                }
                tbody {
                    class: theme::TABLE_DIVIDER,
                    for currency in currencies {
                        tr {
                            key: "{currency.code()}",
                            class: if currency == display { "bg-sky-500/10" } else { "" },
                            td { class: "px-4 py-3 font-medium {theme::TEXT_SECONDARY}", "{currency.code()}" }
                            td {
                                class: "px-4 py-3 text-right font-semibold {theme::ACCENT_TEXT}",
                                {currency.format(fare.amount_in(currency))}
                            }
                        }
                    }
                }
            }
        }
    }
}
