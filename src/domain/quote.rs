//! Quote model shared by the air, ocean and pallet calculators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{booking::BookingService, money::Currency};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuoteError {
    #[error("Weight must be a positive number of kilograms, at most 10 000 kg.")]
    InvalidWeight,
    #[error("Volume must be a positive number of cubic meters.")]
    InvalidVolume,
    #[error("{0} must be a positive number of centimeters.")]
    InvalidDimension(&'static str),
}

/// Service levels offered for consolidated freight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    #[default]
    AirNormal,
    AirExpress,
    OceanConsolidation,
    Pallet,
}

impl ServiceType {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::AirNormal => "Air freight (normal)",
            ServiceType::AirExpress => "Air freight (express)",
            ServiceType::OceanConsolidation => "Ocean consolidation",
            ServiceType::Pallet => "Pallet shipping",
        }
    }

    pub fn transit_estimate(&self) -> &'static str {
        match self {
            ServiceType::AirNormal => "7-10 days",
            ServiceType::AirExpress => "3-5 days",
            ServiceType::OceanConsolidation => "45-60 days",
            ServiceType::Pallet => "25-40 days",
        }
    }

    pub fn booking_service(&self) -> BookingService {
        match self {
            ServiceType::AirNormal | ServiceType::AirExpress => BookingService::AirFreight,
            ServiceType::OceanConsolidation => BookingService::OceanConsolidation,
            ServiceType::Pallet => BookingService::Pallet,
        }
    }
}

/// Countries the consolidation warehouses receive cargo in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OriginCountry {
    #[default]
    China,
    Turkey,
    France,
    Dubai,
    UnitedStates,
}

impl OriginCountry {
    pub const ALL: [OriginCountry; 5] = [
        OriginCountry::China,
        OriginCountry::Turkey,
        OriginCountry::France,
        OriginCountry::Dubai,
        OriginCountry::UnitedStates,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OriginCountry::China => "China",
            OriginCountry::Turkey => "Turkey",
            OriginCountry::France => "France",
            OriginCountry::Dubai => "Dubai (UAE)",
            OriginCountry::UnitedStates => "United States",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            OriginCountry::China => "cn",
            OriginCountry::Turkey => "tr",
            OriginCountry::France => "fr",
            OriginCountry::Dubai => "ae",
            OriginCountry::UnitedStates => "us",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|country| country.key() == key)
    }
}

/// Where a quote ships from: a warehouse country, or a port-to-port lane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum QuoteOrigin {
    Country(OriginCountry),
    Lane { departure: String, arrival: String },
}

impl QuoteOrigin {
    pub fn describe(&self) -> String {
        match self {
            QuoteOrigin::Country(country) => format!("from {}", country.name()),
            QuoteOrigin::Lane { departure, arrival } => format!("{departure} → {arrival}"),
        }
    }
}

impl From<OriginCountry> for QuoteOrigin {
    fn from(country: OriginCountry) -> Self {
        QuoteOrigin::Country(country)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Measure {
    WeightKg(f64),
    VolumeCbm(f64),
    Pallets(u32),
}

impl Measure {
    pub fn unit(&self) -> &'static str {
        match self {
            Measure::WeightKg(_) => "kg",
            Measure::VolumeCbm(_) => "m³",
            Measure::Pallets(1) => "pallet",
            Measure::Pallets(_) => "pallets",
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Measure::WeightKg(value) => format!("{value:.2} {}", self.unit()),
            Measure::VolumeCbm(value) => format!("{value:.3} {}", self.unit()),
            Measure::Pallets(count) => format!("{count} {}", self.unit()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub measure: Measure,
    pub service: ServiceType,
    pub origin: QuoteOrigin,
    /// Price of one billable unit (half-kg bracket, cubic meter or pallet).
    pub rate_per_unit: i64,
    pub billable_units: f64,
    pub total_amount: i64,
    pub currency: Currency,
}

impl Quote {
    pub fn payment_split(&self) -> PaymentSplit {
        PaymentSplit::from_total(self.total_amount, self.currency)
    }

    pub fn summary_line(&self) -> String {
        format!(
            "{} {}: {} -> {}",
            self.service.label(),
            self.origin.describe(),
            self.measure.describe(),
            self.currency.format(self.total_amount as f64)
        )
    }
}

/// Deposit / balance split of a quote total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSplit {
    pub initial_payment: i64,
    pub remaining_payment: i64,
    pub currency: Currency,
}

impl PaymentSplit {
    /// Half up front; any odd unit lands on the remaining payment.
    pub fn from_total(total: i64, currency: Currency) -> Self {
        let initial_payment = total / 2;
        Self {
            initial_payment,
            remaining_payment: total - initial_payment,
            currency,
        }
    }

    pub fn total(&self) -> i64 {
        self.initial_payment + self.remaining_payment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_assigns_remainder_to_balance() {
        let split = PaymentSplit::from_total(26_251, Currency::Xof);
        assert_eq!(split.initial_payment, 13_125);
        assert_eq!(split.remaining_payment, 13_126);
        assert_eq!(split.total(), 26_251);
    }

    #[test]
    fn split_always_sums_to_total() {
        for total in [0_i64, 1, 2, 45_000, 245_001, 9_999_999] {
            let split = PaymentSplit::from_total(total, Currency::Xof);
            assert_eq!(split.initial_payment + split.remaining_payment, total);
            assert!(split.remaining_payment >= split.initial_payment);
        }
    }

    #[test]
    fn origin_keys_round_trip() {
        for country in OriginCountry::ALL {
            assert_eq!(OriginCountry::from_key(country.key()), Some(country));
        }
        assert_eq!(OriginCountry::from_key("xx"), None);
    }

    #[test]
    fn summary_line_names_the_measure_and_origin() {
        let quote = Quote {
            measure: Measure::Pallets(2),
            service: ServiceType::Pallet,
            origin: QuoteOrigin::Lane {
                departure: "Antwerp".into(),
                arrival: "Lomé".into(),
            },
            rate_per_unit: 70_842,
            billable_units: 2.0,
            total_amount: 141_685,
            currency: Currency::Xof,
        };
        let line = quote.summary_line();
        assert!(line.starts_with("Pallet shipping Antwerp → Lomé: 2 pallets -> "));
        assert_eq!(Measure::Pallets(1).describe(), "1 pallet");
        assert_eq!(Measure::VolumeCbm(0.5).describe(), "0.500 m³");
    }
}
