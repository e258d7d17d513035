use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{
        format_in,
        tracking::{dashboard_shipments, summarize},
        AppState, Currency,
    },
    ui::components::{
        kpi_card::KpiCard,
        shipment_table::{ShipmentRow, ShipmentTable},
    },
};

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();
    let display = state.with(|s| s.display_currency);

    let shipments = dashboard_shipments();
    let summary = summarize(&shipments);
    let rows: Vec<ShipmentRow> = shipments
        .iter()
        .map(|shipment| ShipmentRow::from_shipment(shipment, display))
        .collect();
    let billed = format_in(summary.total_billed_xof as f64, Currency::Xof, display);

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-semibold text-slate-100", "Shipments" }
                p { class: "text-sm text-slate-400", "Everything you have booked with us." }
            }
            div { class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "On the way",
                    value: summary.active.to_string(),
                    description: Some("Booked, in transit or awaiting pickup".to_string()),
                }
                KpiCard { title: "Delivered", value: summary.delivered.to_string() }
                KpiCard {
                    title: "Total billed",
                    value: billed,
                    description: Some(format!("Across {} shipments", shipments.len())),
                }
            }
            ShipmentTable {
                rows,
                on_track: move |number: String| {
                    nav.push(Route::Tracking { number });
                },
            }
        }
    }
}
