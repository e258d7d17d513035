use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{
        dimensions_from_inputs,
        ocean::{Dimensions, LARGE_VOLUME_THRESHOLD_M3},
        quote::QuoteError,
        quote_from_dimensions, quote_ocean_consolidation, AppState, BookingService, OriginCountry,
        Quote,
    },
    ui::{
        components::quote_summary::QuoteSummary,
        pages::air_freight::{EmptyQuote, OriginSelect},
        theme,
    },
};

#[component]
pub fn OceanPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let display = state.with(|s| s.display_currency);
    let nav = use_navigator();

    let mut length_input = use_signal(String::new);
    let mut width_input = use_signal(String::new);
    let mut height_input = use_signal(String::new);
    let mut volume_input = use_signal(String::new);
    // Set while the volume field mirrors the dimensions; typing a volume clears it.
    let mut measured = use_signal(|| None::<Dimensions>);
    let mut origin = use_signal(OriginCountry::default);

    // Any dimension edit overwrites the volume field once all three are filled.
    let mut sync_volume = move || {
        let Some(dimensions) = dimensions_from_inputs(&length_input(), &width_input(), &height_input())
        else {
            return;
        };
        if let Ok(volume) = dimensions.volume_m3() {
            measured.set(Some(dimensions));
            volume_input.set(format_volume(volume));
        }
    };

    let raw = volume_input();
    let (quote, error) = match estimate(measured(), &raw, origin()) {
        Some(Ok(quote)) => (Some(quote), None),
        Some(Err(err)) => (None, Some(err)),
        None => (None, None),
    };

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-semibold text-slate-100", "Ocean consolidation estimate" }
                p { class: "text-sm text-slate-400",
                    "Enter package dimensions in centimeters or type the volume directly. "
                    "Shipments of {LARGE_VOLUME_THRESHOLD_M3} m³ and more get the lower rate."
                }
            }
            div { class: "grid gap-6 lg:grid-cols-2",
                section { class: "space-y-5 {theme::PANEL}",
                    div { class: "grid grid-cols-3 gap-3",
                        DimensionInput {
                            label: "Length (cm)",
                            value: length_input(),
                            oninput: move |value| {
                                length_input.set(value);
                                sync_volume();
                            },
                        }
                        DimensionInput {
                            label: "Width (cm)",
                            value: width_input(),
                            oninput: move |value| {
                                width_input.set(value);
                                sync_volume();
                            },
                        }
                        DimensionInput {
                            label: "Height (cm)",
                            value: height_input(),
                            oninput: move |value| {
                                height_input.set(value);
                                sync_volume();
                            },
                        }
                    }
                    div {
                        label { class: theme::LABEL, "Volume (m³)" }
                        input {
                            class: theme::input_class(error.is_some()),
                            r#type: "number",
                            step: "any",
                            min: "0",
                            inputmode: "decimal",
                            placeholder: "e.g. 0.75",
                            value: "{raw}",
                            oninput: move |evt| {
                                measured.set(None);
                                volume_input.set(evt.value());
                            },
                        }
                        if let Some(err) = error.as_ref() {
                            p { class: theme::FIELD_ERROR, "{err}" }
                        }
                    }
                    OriginSelect { value: origin(), onchange: move |next| origin.set(next) }
                }
                section {
                    match quote {
                        Some(quote) => {
                            let booked = quote.clone();
                            rsx! {
                                QuoteSummary {
                                    quote,
                                    display,
                                    on_book: move |_| {
                                        state.with_mut(|s| s.record_quote(booked.clone()));
                                        nav.push(Route::booking(BookingService::OceanConsolidation));
                                    },
                                }
                            }
                        }
                        None => rsx! { EmptyQuote { error: error.is_some() } },
                    }
                }
            }
        }
    }
}

#[component]
fn DimensionInput(label: &'static str, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        div {
            label { class: theme::LABEL, "{label}" }
            input {
                class: theme::input_class(false),
                r#type: "number",
                min: "0",
                inputmode: "decimal",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

/// Measured dimensions win over the volume text, which is only a display copy.
fn estimate(
    measured: Option<Dimensions>,
    raw_volume: &str,
    origin: OriginCountry,
) -> Option<Result<Quote, QuoteError>> {
    if let Some(dimensions) = measured {
        return Some(quote_from_dimensions(&dimensions, origin));
    }
    let raw = raw_volume.trim();
    if raw.is_empty() {
        return None;
    }
    let volume = raw.replace(',', ".").parse::<f64>().unwrap_or(f64::NAN);
    Some(quote_ocean_consolidation(volume, origin))
}

/// Six decimals without trailing zeros; tinier volumes keep full precision.
fn format_volume(volume: f64) -> String {
    let text = format!("{volume:.6}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "0" && volume > 0.0 {
        volume.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_field_drops_trailing_zeros() {
        assert_eq!(format_volume(1.0), "1");
        assert_eq!(format_volume(0.125), "0.125");
        assert_eq!(format_volume(2.5), "2.5");
        assert_eq!(format_volume(0.000_125), "0.000125");
    }

    #[test]
    fn measured_parcels_are_priced_from_their_dimensions() {
        let dims = dimensions_from_inputs("5", "5", "5").unwrap();
        let shown = format_volume(dims.volume_m3().unwrap());
        let quote = estimate(Some(dims), &shown, OriginCountry::China)
            .unwrap()
            .unwrap();
        assert_eq!(quote.total_amount, 35);

        let dims = dimensions_from_inputs("33.3", "33.3", "33.3").unwrap();
        let shown = format_volume(dims.volume_m3().unwrap());
        assert_eq!(shown, "0.036926");
        let quote = estimate(Some(dims), &shown, OriginCountry::China)
            .unwrap()
            .unwrap();
        assert_eq!(quote.total_amount, 10_339);
    }

    #[test]
    fn typed_volume_is_used_without_dimensions() {
        let quote = estimate(None, " 0,5 ", OriginCountry::France).unwrap().unwrap();
        assert_eq!(quote.total_amount, 140_000);
        assert!(estimate(None, "  ", OriginCountry::France).is_none());
        assert_eq!(
            estimate(None, "abc", OriginCountry::France),
            Some(Err(QuoteError::InvalidVolume))
        );
    }
}
