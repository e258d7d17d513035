use dioxus::prelude::*;

use crate::domain::ShipmentStatus;

#[component]
pub fn StatusBadge(status: ShipmentStatus) -> Element {
    let color = match status {
        ShipmentStatus::Delivered => "bg-emerald-500/10 text-emerald-300 border-emerald-500/40",
        ShipmentStatus::OutForDelivery => "bg-sky-500/10 text-sky-300 border-sky-500/40",
        ShipmentStatus::Customs => "bg-amber-500/10 text-amber-300 border-amber-500/40",
        ShipmentStatus::InTransit => "bg-indigo-500/10 text-indigo-300 border-indigo-500/40",
        ShipmentStatus::Booked | ShipmentStatus::ReceivedAtWarehouse => {
            "bg-slate-700/40 text-slate-300 border-slate-600/60"
        }
    };

    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {color}",
            "{status.label()}"
        }
    }
}
