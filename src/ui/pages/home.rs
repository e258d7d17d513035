use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{service_catalog, ServiceOffering},
    ui::theme,
};

#[component]
pub fn HomePage() -> Element {
    let offerings = service_catalog();

    rsx! {
        div { class: "space-y-10",
            header { class: "space-y-3",
                h1 { class: "text-3xl font-semibold text-slate-100", "Ship to Lomé without the guesswork" }
                p { class: "max-w-2xl text-sm text-slate-400",
                    "Estimate air, ocean and pallet freight in seconds, book a crossing, "
                    "pay your suppliers abroad and follow every parcel until pickup."
                }
            }
            div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                for offering in offerings {
                    ServiceCard { key: "{offering.title}", offering }
                }
            }
        }
    }
}

#[component]
fn ServiceCard(offering: ServiceOffering) -> Element {
    let nav = use_navigator();
    let target = offering.target;

    rsx! {
        article { class: "flex flex-col justify-between {theme::PANEL}",
            div {
                div { class: "flex items-center gap-3",
                    span { class: "text-3xl", "{offering.icon}" }
                    h2 { class: "text-lg font-semibold text-slate-100", "{offering.title}" }
                }
                p { class: "mt-3 text-sm {theme::TEXT_SECONDARY}", "{offering.summary}" }
                ul { class: "mt-4 space-y-1 text-xs {theme::TEXT_MUTED}",
                    for highlight in offering.highlights.iter() {
                        li { key: "{highlight}", "• {highlight}" }
                    }
                }
            }
            button {
                class: "mt-6 self-start {theme::BTN_PRIMARY}",
                onclick: move |_| {
                    nav.push(Route::for_catalog(target));
                },
                "{offering.cta} →"
            }
        }
    }
}
