use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, BookingService, CatalogTarget},
    infra::{backend::MockBackend, payment::StubPaymentGateway},
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{
            AirFreightPage, BookingPage, DashboardPage, HomePage, OceanPage, PalletPage,
            PaymentPage, SettingsPage, SupplierPaymentPage, TrackingPage,
        },
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/air-freight")]
    AirFreight {},
    #[route("/ocean")]
    Ocean {},
    #[route("/pallet")]
    Pallet {},
    #[route("/booking?:service")]
    Booking { service: String },
    #[route("/payment?:reference")]
    Payment { reference: String },
    #[route("/supplier-payment")]
    SupplierPayment {},
    #[route("/tracking?:number")]
    Tracking { number: String },
    #[route("/dashboard")]
    Dashboard {},
    #[route("/settings")]
    Settings {},
}

impl Route {
    pub fn booking(service: BookingService) -> Self {
        Route::Booking {
            service: service.slug().to_string(),
        }
    }

    pub fn for_catalog(target: CatalogTarget) -> Self {
        match target {
            CatalogTarget::AirCalculator => Route::AirFreight {},
            CatalogTarget::OceanCalculator => Route::Ocean {},
            CatalogTarget::PalletCalculator => Route::Pallet {},
            CatalogTarget::Booking(service) => Route::booking(service),
            CatalogTarget::SupplierPayment => Route::SupplierPayment {},
            CatalogTarget::Tracking => Route::Tracking {
                number: String::new(),
            },
        }
    }
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state;
        move || {
            if let Some(saved) = load_persisted_state() {
                tracing::info!(currency = saved.display_currency.code(), "restored preferences");
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    use_context_provider(MockBackend::new);
    use_context_provider(StubPaymentGateway::new);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Script { src: assets::TAILWIND_CDN }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        tracing::warn!("Failed to persist preferences: {err}");
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn AirFreight() -> Element {
    rsx! { Shell { AirFreightPage {} } }
}

#[component]
pub fn Ocean() -> Element {
    rsx! { Shell { OceanPage {} } }
}

#[component]
pub fn Pallet() -> Element {
    rsx! { Shell { PalletPage {} } }
}

#[component]
pub fn Booking(service: String) -> Element {
    rsx! { Shell { BookingPage { service } } }
}

#[component]
pub fn Payment(reference: String) -> Element {
    rsx! { Shell { PaymentPage { reference } } }
}

#[component]
pub fn SupplierPayment() -> Element {
    rsx! { Shell { SupplierPaymentPage {} } }
}

#[component]
pub fn Tracking(number: String) -> Element {
    rsx! { Shell { TrackingPage { number } } }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
