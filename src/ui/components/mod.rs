pub mod fare_table;
pub mod form_field;
pub mod kpi_card;
pub mod quote_summary;
pub mod shipment_table;
pub mod status_badge;
pub mod step_indicator;
pub mod toast;
