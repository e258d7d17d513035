//! Shipment tracking and dashboard data.
//!
//! There is no carrier feed behind this: every well-formed tracking number
//! resolves to the same sample timeline, and the dashboard lists a fixed set
//! of shipments.

use std::sync::OnceLock;

use regex::Regex;
use time::{macros::datetime, macros::format_description, PrimitiveDateTime};

use super::quote::ServiceType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShipmentStatus {
    Booked,
    ReceivedAtWarehouse,
    InTransit,
    Customs,
    OutForDelivery,
    Delivered,
}

impl ShipmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ShipmentStatus::Booked => "Booked",
            ShipmentStatus::ReceivedAtWarehouse => "At warehouse",
            ShipmentStatus::InTransit => "In transit",
            ShipmentStatus::Customs => "Customs",
            ShipmentStatus::OutForDelivery => "Out for delivery",
            ShipmentStatus::Delivered => "Delivered",
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, ShipmentStatus::Delivered)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackingEvent {
    pub status: ShipmentStatus,
    pub location: &'static str,
    pub description: &'static str,
    pub at: PrimitiveDateTime,
}

impl TrackingEvent {
    pub fn timestamp_label(&self) -> String {
        let format = format_description!("[day] [month repr:short] [year], [hour]:[minute]");
        self.at.format(&format).unwrap_or_else(|_| self.at.to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shipment {
    pub tracking_number: &'static str,
    pub service: ServiceType,
    pub origin: &'static str,
    pub destination: &'static str,
    pub status: ShipmentStatus,
    pub billed_xof: i64,
    pub updated: PrimitiveDateTime,
}

fn tracking_regex() -> &'static Regex {
    static TRACKING: OnceLock<Regex> = OnceLock::new();
    TRACKING.get_or_init(|| {
        Regex::new(r"^[A-Z]{2}-[A-Z0-9]{8}$").expect("tracking pattern compiles")
    })
}

/// Uppercases and trims user input; `None` when it is not `XX-XXXXXXXX`.
pub fn normalize_tracking_number(raw: &str) -> Option<String> {
    let candidate = raw.trim().to_ascii_uppercase();
    tracking_regex().is_match(&candidate).then_some(candidate)
}

/// Sample timeline, oldest event first.
pub fn sample_timeline() -> Vec<TrackingEvent> {
    vec![
        TrackingEvent {
            status: ShipmentStatus::Booked,
            location: "Online",
            description: "Booking confirmed and reference issued",
            at: datetime!(2026-10-02 09:14),
        },
        TrackingEvent {
            status: ShipmentStatus::ReceivedAtWarehouse,
            location: "Guangzhou, China",
            description: "Parcel weighed and received at the consolidation warehouse",
            at: datetime!(2026-10-04 15:40),
        },
        TrackingEvent {
            status: ShipmentStatus::InTransit,
            location: "Guangzhou Baiyun Airport",
            description: "Departed on consolidated air cargo",
            at: datetime!(2026-10-06 23:05),
        },
        TrackingEvent {
            status: ShipmentStatus::InTransit,
            location: "Addis Ababa, Ethiopia",
            description: "In transit via hub",
            at: datetime!(2026-10-07 11:30),
        },
        TrackingEvent {
            status: ShipmentStatus::Customs,
            location: "Lomé, Togo",
            description: "Arrived and submitted for customs clearance",
            at: datetime!(2026-10-08 08:20),
        },
        TrackingEvent {
            status: ShipmentStatus::OutForDelivery,
            location: "Lomé, Togo",
            description: "Cleared customs, ready for pickup at the agency",
            at: datetime!(2026-10-09 10:00),
        },
    ]
}

pub fn dashboard_shipments() -> Vec<Shipment> {
    vec![
        Shipment {
            tracking_number: "SH-7F3A91C2",
            service: ServiceType::AirExpress,
            origin: "Istanbul",
            destination: "Lomé",
            status: ShipmentStatus::OutForDelivery,
            billed_xof: 45_000,
            updated: datetime!(2026-10-09 10:00),
        },
        Shipment {
            tracking_number: "SH-19B04D7E",
            service: ServiceType::AirNormal,
            origin: "Guangzhou",
            destination: "Lomé",
            status: ShipmentStatus::InTransit,
            billed_xof: 26_250,
            updated: datetime!(2026-10-07 11:30),
        },
        Shipment {
            tracking_number: "SH-C2E85A10",
            service: ServiceType::OceanConsolidation,
            origin: "Shanghai",
            destination: "Lomé",
            status: ShipmentStatus::ReceivedAtWarehouse,
            billed_xof: 245_000,
            updated: datetime!(2026-10-05 16:45),
        },
        Shipment {
            tracking_number: "SH-0D6B2F44",
            service: ServiceType::OceanConsolidation,
            origin: "Le Havre",
            destination: "Lomé",
            status: ShipmentStatus::Delivered,
            billed_xof: 140_000,
            updated: datetime!(2026-09-21 14:10),
        },
    ]
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardSummary {
    pub active: usize,
    pub delivered: usize,
    pub total_billed_xof: i64,
}

pub fn summarize(shipments: &[Shipment]) -> DashboardSummary {
    shipments
        .iter()
        .fold(DashboardSummary::default(), |mut summary, shipment| {
            if shipment.status.is_active() {
                summary.active += 1;
            } else {
                summary.delivered += 1;
            }
            summary.total_billed_xof += shipment.billed_xof;
            summary
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_and_validates_tracking_numbers() {
        assert_eq!(
            normalize_tracking_number(" sh-7f3a91c2 "),
            Some("SH-7F3A91C2".to_string())
        );
        assert_eq!(normalize_tracking_number("SH7F3A91C2"), None);
        assert_eq!(normalize_tracking_number("SH-7F3A"), None);
        assert_eq!(normalize_tracking_number("bogus"), None);
    }

    #[test]
    fn sample_timeline_is_chronological() {
        let timeline = sample_timeline();
        assert!(!timeline.is_empty());
        assert!(timeline.windows(2).all(|pair| pair[0].at <= pair[1].at));
        assert!(timeline.windows(2).all(|pair| pair[0].status <= pair[1].status));
    }

    #[test]
    fn formats_event_timestamps() {
        let event = &sample_timeline()[0];
        assert_eq!(event.timestamp_label(), "02 Oct 2026, 09:14");
    }

    #[test]
    fn dashboard_summary_counts_and_totals() {
        let summary = summarize(&dashboard_shipments());
        assert_eq!(summary.active, 3);
        assert_eq!(summary.delivered, 1);
        assert_eq!(summary.total_billed_xof, 456_250);
    }

    #[test]
    fn dashboard_numbers_are_trackable() {
        for shipment in dashboard_shipments() {
            assert!(normalize_tracking_number(shipment.tracking_number).is_some());
        }
    }
}
