//! Pricing, booking and verification logic lives here.

pub mod air;
pub mod app_state;
pub mod booking;
pub mod catalog;
pub mod money;
pub mod ocean;
pub mod pallet;
pub mod quote;
pub mod reference;
pub mod tracking;
pub mod validation;
pub mod wizard;

pub use air::{bracket_count, quote_air_freight, AirService};
pub use app_state::{AppState, ContactDefaults, PersistedState};
pub use booking::{BookingRequest, BookingService};
pub use catalog::{service_catalog, CatalogTarget, ServiceOffering};
pub use money::{format_in, Currency};
pub use ocean::{dimensions_from_inputs, quote_from_dimensions, quote_ocean_consolidation};
pub use pallet::{quote_pallet, PalletFare, PalletRequest, PalletType, PORTS};
pub use quote::{Measure, OriginCountry, PaymentSplit, Quote, QuoteOrigin};
pub use reference::{generate_reference, ReferenceKind};
pub use tracking::{ShipmentStatus, TrackingEvent};
pub use validation::{error_for, FieldError};
pub use wizard::{DocumentUpload, PaymentDetailsForm, VerificationState, WizardStep};
