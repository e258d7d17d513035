//! Pallet fare calculator.
//!
//! Fares come from a fixed EUR rate table when the lane is published. Other
//! lanes are extrapolated from distance: lanes touching Lomé scale the
//! reference Antwerp-Lomé rate, everything else uses a flat per-km rate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    money::{convert, Currency},
    quote::{Measure, Quote, QuoteOrigin, ServiceType},
};

pub const ANCHOR_PORT: &str = "TGLFW";
pub const REFERENCE_PORT: &str = "BEANR";
pub const REFERENCE_RATE_EUR: f64 = 120.0;
pub const REFERENCE_DISTANCE_KM: f64 = 7_600.0;
pub const PER_KM_REFERENCE_EUR: f64 = 0.018;
pub const DISCOUNT_MULTIPLIER: f64 = 0.90;
pub const MAX_PALLETS: u32 = 33;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Port {
    pub code: &'static str,
    pub name: &'static str,
    pub country: &'static str,
}

pub const PORTS: &[Port] = &[
    Port { code: "TGLFW", name: "Lomé", country: "Togo" },
    Port { code: "BEANR", name: "Antwerp", country: "Belgium" },
    Port { code: "NLRTM", name: "Rotterdam", country: "Netherlands" },
    Port { code: "FRLEH", name: "Le Havre", country: "France" },
    Port { code: "FRMRS", name: "Marseille", country: "France" },
    Port { code: "TRAMR", name: "Ambarli (Istanbul)", country: "Turkey" },
    Port { code: "AEJEA", name: "Jebel Ali", country: "United Arab Emirates" },
    Port { code: "CNSHA", name: "Shanghai", country: "China" },
    Port { code: "CIABJ", name: "Abidjan", country: "Côte d'Ivoire" },
    Port { code: "BJCOO", name: "Cotonou", country: "Benin" },
    Port { code: "GHTEM", name: "Tema", country: "Ghana" },
    Port { code: "NGAPP", name: "Apapa (Lagos)", country: "Nigeria" },
    Port { code: "SNDKR", name: "Dakar", country: "Senegal" },
];

/// Published per-pallet lanes in EUR. Lookups ignore direction.
const FIXED_RATES_EUR: &[(&str, &str, f64)] = &[
    (REFERENCE_PORT, ANCHOR_PORT, REFERENCE_RATE_EUR),
    ("NLRTM", "TGLFW", 125.0),
    ("FRLEH", "TGLFW", 135.0),
    ("FRMRS", "TGLFW", 150.0),
    ("CNSHA", "TGLFW", 210.0),
    ("TGLFW", "CIABJ", 45.0),
    ("TGLFW", "BJCOO", 30.0),
];

/// Port-to-port sea distances in kilometers. Lookups ignore direction.
const DISTANCES_KM: &[(&str, &str, f64)] = &[
    (ANCHOR_PORT, REFERENCE_PORT, REFERENCE_DISTANCE_KM),
    ("TGLFW", "NLRTM", 7_750.0),
    ("TGLFW", "FRLEH", 7_300.0),
    ("TGLFW", "FRMRS", 6_900.0),
    ("TGLFW", "TRAMR", 8_600.0),
    ("TGLFW", "AEJEA", 12_900.0),
    ("TGLFW", "CNSHA", 20_500.0),
    ("TGLFW", "CIABJ", 700.0),
    ("TGLFW", "BJCOO", 150.0),
    ("TGLFW", "GHTEM", 200.0),
    ("TGLFW", "NGAPP", 300.0),
    ("TGLFW", "SNDKR", 3_800.0),
    ("BEANR", "CIABJ", 7_000.0),
    ("BEANR", "GHTEM", 7_450.0),
    ("BEANR", "SNDKR", 5_000.0),
    ("NLRTM", "CIABJ", 7_150.0),
    ("FRLEH", "CIABJ", 6_700.0),
    ("FRLEH", "SNDKR", 4_600.0),
    ("FRLEH", "NGAPP", 7_600.0),
    ("FRMRS", "CIABJ", 6_200.0),
    ("FRMRS", "SNDKR", 4_100.0),
    ("TRAMR", "CIABJ", 7_900.0),
    ("AEJEA", "CIABJ", 12_600.0),
    ("CNSHA", "CIABJ", 20_200.0),
    ("CIABJ", "GHTEM", 550.0),
    ("CIABJ", "SNDKR", 2_300.0),
];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PalletError {
    #[error("Unknown port code: {0}")]
    UnknownPort(String),
    #[error("No fare or distance is available between {from} and {to}.")]
    NoRoute { from: String, to: String },
    #[error("Pallet count must be between 1 and {MAX_PALLETS}.")]
    InvalidCount,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PalletType {
    #[default]
    Euro,
    Industrial,
    Oversized,
}

impl PalletType {
    pub const ALL: [PalletType; 3] = [PalletType::Euro, PalletType::Industrial, PalletType::Oversized];

    pub fn label(&self) -> &'static str {
        match self {
            PalletType::Euro => "Euro pallet (120×80 cm)",
            PalletType::Industrial => "Industrial pallet (120×100 cm)",
            PalletType::Oversized => "Oversized pallet",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PalletType::Euro => "euro",
            PalletType::Industrial => "industrial",
            PalletType::Oversized => "oversized",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn surcharge_multiplier(&self) -> f64 {
        match self {
            PalletType::Euro => 1.0,
            PalletType::Industrial => 1.2,
            PalletType::Oversized => 1.5,
        }
    }
}

/// How the base lane rate was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FareMethod {
    SamePort,
    FixedRate,
    AnchorScaled,
    PerKilometer,
}

impl FareMethod {
    pub fn describe(&self) -> &'static str {
        match self {
            FareMethod::SamePort => "Departure and arrival are the same port",
            FareMethod::FixedRate => "Published lane rate",
            FareMethod::AnchorScaled => "Estimated from the Lomé reference lane",
            FareMethod::PerKilometer => "Estimated from the per-kilometer reference rate",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PalletRequest {
    pub departure: String,
    pub arrival: String,
    pub pallet_type: PalletType,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PalletFare {
    pub eur: f64,
    pub usd: f64,
    pub xof: f64,
    pub base_rate_eur: f64,
    pub distance_km: Option<f64>,
    pub method: FareMethod,
}

impl PalletFare {
    fn zero() -> Self {
        Self {
            eur: 0.0,
            usd: 0.0,
            xof: 0.0,
            base_rate_eur: 0.0,
            distance_km: Some(0.0),
            method: FareMethod::SamePort,
        }
    }

    pub fn amount_in(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Xof => self.xof,
            Currency::Eur => self.eur,
            Currency::Usd => self.usd,
        }
    }

    /// The fare as a bookable quote, billed in FCFA like the other services.
    pub fn to_quote(&self, request: &PalletRequest) -> Quote {
        let port_name = |code: &str| {
            find_port(code)
                .map(|port| port.name.to_string())
                .unwrap_or_else(|| code.trim().to_uppercase())
        };
        let count = request.count.max(1);

        Quote {
            measure: Measure::Pallets(count),
            service: ServiceType::Pallet,
            origin: QuoteOrigin::Lane {
                departure: port_name(&request.departure),
                arrival: port_name(&request.arrival),
            },
            rate_per_unit: (self.xof / f64::from(count)).round() as i64,
            billable_units: f64::from(count),
            total_amount: self.xof.round() as i64,
            currency: Currency::Xof,
        }
    }
}

pub fn find_port(code: &str) -> Option<&'static Port> {
    let code = code.trim();
    PORTS.iter().find(|port| port.code.eq_ignore_ascii_case(code))
}

fn lookup_pair(table: &[(&str, &str, f64)], a: &str, b: &str) -> Option<f64> {
    table
        .iter()
        .find(|(from, to, _)| (*from == a && *to == b) || (*from == b && *to == a))
        .map(|(_, _, value)| *value)
}

pub fn fixed_rate_eur(a: &str, b: &str) -> Option<f64> {
    lookup_pair(FIXED_RATES_EUR, a, b)
}

pub fn distance_km(a: &str, b: &str) -> Option<f64> {
    if a == b {
        return Some(0.0);
    }
    lookup_pair(DISTANCES_KM, a, b)
}

/// Per-pallet base rate in EUR before discount and surcharge.
fn base_rate(from: &str, to: &str) -> Result<(f64, Option<f64>, FareMethod), PalletError> {
    let distance = distance_km(from, to);

    if let Some(rate) = fixed_rate_eur(from, to) {
        return Ok((rate, distance, FareMethod::FixedRate));
    }

    let Some(distance) = distance else {
        return Err(PalletError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        });
    };

    if from == ANCHOR_PORT || to == ANCHOR_PORT {
        let rate = REFERENCE_RATE_EUR * distance / REFERENCE_DISTANCE_KM;
        Ok((rate, Some(distance), FareMethod::AnchorScaled))
    } else {
        Ok((distance * PER_KM_REFERENCE_EUR, Some(distance), FareMethod::PerKilometer))
    }
}

pub fn quote_pallet(request: &PalletRequest) -> Result<PalletFare, PalletError> {
    let from = find_port(&request.departure)
        .ok_or_else(|| PalletError::UnknownPort(request.departure.clone()))?;
    let to = find_port(&request.arrival)
        .ok_or_else(|| PalletError::UnknownPort(request.arrival.clone()))?;

    if request.count == 0 || request.count > MAX_PALLETS {
        return Err(PalletError::InvalidCount);
    }

    if from.code == to.code {
        return Ok(PalletFare::zero());
    }

    let (base_rate_eur, distance, method) = base_rate(from.code, to.code)?;
    let eur = base_rate_eur
        * request.count as f64
        * DISCOUNT_MULTIPLIER
        * request.pallet_type.surcharge_multiplier();

    tracing::debug!(
        from = from.code,
        to = to.code,
        ?method,
        base_rate_eur,
        eur,
        "priced pallet lane"
    );

    Ok(PalletFare {
        eur: Currency::Eur.round(eur),
        usd: Currency::Usd.round(convert(eur, Currency::Eur, Currency::Usd)),
        xof: Currency::Xof.round(convert(eur, Currency::Eur, Currency::Xof)),
        base_rate_eur,
        distance_km: distance,
        method,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(from: &str, to: &str, pallet_type: PalletType, count: u32) -> PalletRequest {
        PalletRequest {
            departure: from.to_string(),
            arrival: to.to_string(),
            pallet_type,
            count,
        }
    }

    #[test]
    fn same_port_is_free_in_every_currency() {
        let fare = quote_pallet(&request("TGLFW", "tglfw", PalletType::Oversized, 4)).unwrap();
        assert_eq!(fare.method, FareMethod::SamePort);
        for currency in Currency::ALL {
            assert_eq!(fare.amount_in(currency), 0.0);
        }
    }

    #[test]
    fn published_lane_uses_fixed_rate_in_both_directions() {
        let outbound = quote_pallet(&request("BEANR", "TGLFW", PalletType::Euro, 1)).unwrap();
        let inbound = quote_pallet(&request("TGLFW", "BEANR", PalletType::Euro, 1)).unwrap();
        assert_eq!(outbound.method, FareMethod::FixedRate);
        assert_eq!(outbound.eur, 108.0);
        assert_eq!(inbound.eur, outbound.eur);
    }

    #[test]
    fn surcharge_and_count_multiply_the_lane_rate() {
        let fare = quote_pallet(&request("BEANR", "TGLFW", PalletType::Industrial, 2)).unwrap();
        assert_eq!(fare.eur, 259.2);
    }

    #[test]
    fn lanes_touching_lome_scale_the_reference_rate() {
        let fare = quote_pallet(&request("SNDKR", "TGLFW", PalletType::Euro, 1)).unwrap();
        assert_eq!(fare.method, FareMethod::AnchorScaled);
        assert_eq!(fare.base_rate_eur, 60.0);
        assert_eq!(fare.eur, 54.0);
    }

    #[test]
    fn other_lanes_use_the_per_km_rate_and_convert() {
        let fare = quote_pallet(&request("BEANR", "SNDKR", PalletType::Euro, 1)).unwrap();
        assert_eq!(fare.method, FareMethod::PerKilometer);
        assert_eq!(fare.distance_km, Some(5_000.0));
        assert_eq!(fare.eur, 81.0);
        assert_eq!(fare.usd, 87.48);
        assert_eq!(fare.xof, 53_133.0);
    }

    #[test]
    fn unknown_ports_and_lanes_are_errors() {
        assert_eq!(
            quote_pallet(&request("XXXXX", "TGLFW", PalletType::Euro, 1)),
            Err(PalletError::UnknownPort("XXXXX".to_string()))
        );
        assert!(matches!(
            quote_pallet(&request("CNSHA", "SNDKR", PalletType::Euro, 1)),
            Err(PalletError::NoRoute { .. })
        ));
        assert_eq!(
            quote_pallet(&request("BEANR", "TGLFW", PalletType::Euro, 0)),
            Err(PalletError::InvalidCount)
        );
    }

    #[test]
    fn reference_lane_is_published_both_ways() {
        assert_eq!(fixed_rate_eur(REFERENCE_PORT, ANCHOR_PORT), Some(REFERENCE_RATE_EUR));
        assert_eq!(fixed_rate_eur(ANCHOR_PORT, REFERENCE_PORT), Some(REFERENCE_RATE_EUR));
        assert_eq!(distance_km(REFERENCE_PORT, ANCHOR_PORT), Some(REFERENCE_DISTANCE_KM));
    }

    #[test]
    fn booked_fare_becomes_an_fcfa_quote() {
        let req = request("beanr", "TGLFW", PalletType::Industrial, 2);
        let fare = quote_pallet(&req).unwrap();
        let quote = fare.to_quote(&req);

        assert_eq!(quote.service, ServiceType::Pallet);
        assert_eq!(quote.measure, Measure::Pallets(2));
        assert_eq!(quote.currency, Currency::Xof);
        assert_eq!(quote.total_amount, fare.xof as i64);
        assert_eq!(
            quote.origin,
            QuoteOrigin::Lane {
                departure: "Antwerp".to_string(),
                arrival: "Lomé".to_string(),
            }
        );

        let split = quote.payment_split();
        assert_eq!(split.initial_payment, quote.total_amount / 2);
        assert_eq!(split.total(), quote.total_amount);
    }
}
