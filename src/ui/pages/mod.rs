pub mod air_freight;
pub mod booking;
pub mod dashboard;
pub mod home;
pub mod ocean;
pub mod pallet;
pub mod payment;
pub mod settings;
pub mod supplier_payment;
pub mod tracking;

pub use air_freight::AirFreightPage;
pub use booking::BookingPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use ocean::OceanPage;
pub use pallet::PalletPage;
pub use payment::PaymentPage;
pub use settings::SettingsPage;
pub use supplier_payment::SupplierPaymentPage;
pub use tracking::TrackingPage;
