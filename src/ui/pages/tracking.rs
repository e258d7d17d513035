use dioxus::prelude::*;

use crate::{
    domain::TrackingEvent,
    infra::backend::{BackendError, MockBackend},
    ui::{components::status_badge::StatusBadge, theme},
};

type Lookup = Result<(String, Vec<TrackingEvent>), BackendError>;

#[component]
pub fn TrackingPage(number: String) -> Element {
    let backend = use_context::<MockBackend>();

    let mut query = use_signal(|| number.clone());
    let mut busy = use_signal(|| false);
    let mut outcome = use_signal(|| None::<Lookup>);

    let mut run_lookup = move |raw: String| {
        if busy() || raw.trim().is_empty() {
            return;
        }
        let backend = backend.clone();
        busy.set(true);
        spawn(async move {
            let result = backend.lookup_tracking(&raw).await;
            outcome.set(Some(result));
            busy.set(false);
        });
    };

    // A number in the query string is looked up once on arrival.
    use_hook(|| {
        if !number.trim().is_empty() {
            run_lookup(number.clone());
        }
    });

    rsx! {
        div { class: "mx-auto max-w-3xl space-y-6",
            header {
                h1 { class: "text-2xl font-semibold text-slate-100", "Track a shipment" }
                p { class: "text-sm text-slate-400", "Tracking numbers look like SH-7F3A91C2." }
            }
            form {
                class: "flex gap-3",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    run_lookup(query());
                },
                input {
                    class: theme::input_class(matches!(outcome(), Some(Err(_)))),
                    placeholder: "SH-XXXXXXXX",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                button {
                    class: theme::BTN_PRIMARY,
                    r#type: "submit",
                    disabled: busy(),
                    if busy() {
                        span { class: "spinner" }
                    }
                    "Track"
                }
            }
            match outcome() {
                Some(Ok((tracking_number, events))) => rsx! {
                    Timeline { tracking_number, events }
                },
                Some(Err(err)) => rsx! {
                    p { class: theme::FIELD_ERROR, "{err}" }
                },
                None => rsx! {},
            }
        }
    }
}

#[component]
fn Timeline(tracking_number: String, events: Vec<TrackingEvent>) -> Element {
    let latest = events.last().map(|event| event.status);
    let count = events.len();
    // Newest first on screen.
    let ordered: Vec<(usize, TrackingEvent)> = events.into_iter().rev().enumerate().collect();

    rsx! {
        section { class: theme::PANEL,
            div { class: "flex items-center justify-between",
                h2 { class: "font-mono text-lg font-semibold text-slate-100", "{tracking_number}" }
                if let Some(status) = latest {
                    StatusBadge { status }
                }
            }
            ol { class: "mt-6 space-y-6",
                for (index, event) in ordered {
                    li { key: "{index}", class: "relative flex gap-4",
                        if index + 1 < count {
                            span { class: "timeline-line" }
                        }
                        span {
                            class: if index == 0 { "step-dot step-dot--current" } else { "step-dot step-dot--done" },
                            "•"
                        }
                        div {
                            p { class: "text-sm font-semibold text-slate-100", "{event.description}" }
                            p { class: "text-xs {theme::TEXT_MUTED}",
                                "{event.location} · {event.timestamp_label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
