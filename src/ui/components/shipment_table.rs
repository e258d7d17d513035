use dioxus::prelude::*;

use super::status_badge::StatusBadge;
use crate::domain::{format_in, tracking::Shipment, Currency, ShipmentStatus};
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct ShipmentRow {
    pub tracking_number: String,
    pub service: String,
    pub lane: String,
    pub status: ShipmentStatus,
    pub billed: String,
    pub updated: String,
}

impl ShipmentRow {
    pub fn from_shipment(shipment: &Shipment, display: Currency) -> Self {
        Self {
            tracking_number: shipment.tracking_number.to_string(),
            service: shipment.service.label().to_string(),
            lane: format!("{} → {}", shipment.origin, shipment.destination),
            status: shipment.status,
            billed: format_in(shipment.billed_xof as f64, Currency::Xof, display),
            updated: shipment.updated.date().to_string(),
        }
    }
}

#[component]
pub fn ShipmentTable(rows: Vec<ShipmentRow>, on_track: EventHandler<String>) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: theme::TABLE_CONTAINER,
            table {
                class: "min-w-full {theme::TABLE_DIVIDER} text-sm",
                thead {
                    class: theme::TABLE_HEADER,
                    tr {
                        th { class: "px-4 py-3 font-medium", "Tracking #" }
                        th { class: "px-4 py-3 font-medium", "Service" }
                        th { class: "px-4 py-3 font-medium", "Lane" }
                        th { class: "px-4 py-3 font-medium", "Status" }
                        th { class: "px-4 py-3 font-medium text-right", "Billed" }
                        th { class: "px-4 py-3 font-medium", "Updated" }
                        th { class: "px-4 py-3" }
                    }
                }
                tbody {
                    class: theme::TABLE_DIVIDER,
                    for row in rows {
                        ShipmentRowView { key: "{row.tracking_number}", row, on_track }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm {theme::TEXT_MUTED}",
                                colspan: "7",
                                "No shipments yet. Book one to see it here."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ShipmentRowView(row: ShipmentRow, on_track: EventHandler<String>) -> Element {
    let number = row.tracking_number.clone();
    rsx! {
        tr {
            class: "transition-colors hover:bg-slate-800/40",
            td { class: "px-4 py-3 font-mono text-xs {theme::TEXT_SECONDARY}", "{row.tracking_number}" }
            td { class: "px-4 py-3 {theme::TEXT_SECONDARY}", "{row.service}" }
            td { class: "px-4 py-3 {theme::TEXT_MUTED}", "{row.lane}" }
            td { class: "px-4 py-3", StatusBadge { status: row.status } }
            td { class: "px-4 py-3 text-right {theme::TEXT_SECONDARY}", "{row.billed}" }
            td { class: "px-4 py-3 {theme::TEXT_MUTED}", "{row.updated}" }
            td {
                class: "px-4 py-3 text-right",
                button {
                    class: theme::LINK,
                    onclick: move |_| on_track.call(number.clone()),
                    "Track"
                }
            }
        }
    }
}
