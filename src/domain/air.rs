//! Air freight weight banding.
//!
//! Weights are billed in half-kilogram brackets. The billable weight rounds a
//! fractional kilogram up to the next half kilogram when the fraction is at
//! most 0.5, and up to the next whole kilogram otherwise.

use super::{
    money::Currency,
    quote::{Measure, OriginCountry, Quote, QuoteError, ServiceType},
};

pub const MIN_WEIGHT_KG: f64 = 0.1;
/// Heaviest consolidated parcel accepted on one quote.
pub const MAX_WEIGHT_KG: f64 = 10_000.0;
pub const BRACKET_KG: f64 = 0.5;
pub const NORMAL_RATE_PER_BRACKET: i64 = 5_250;
pub const EXPRESS_RATE_PER_BRACKET: i64 = 7_500;

const FRACTION_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AirService {
    #[default]
    Normal,
    Express,
}

impl AirService {
    pub fn rate_per_bracket(&self) -> i64 {
        match self {
            AirService::Normal => NORMAL_RATE_PER_BRACKET,
            AirService::Express => EXPRESS_RATE_PER_BRACKET,
        }
    }

    pub fn service_type(&self) -> ServiceType {
        match self {
            AirService::Normal => ServiceType::AirNormal,
            AirService::Express => ServiceType::AirExpress,
        }
    }
}

/// Rounds a weight up to its billable band. Inputs below the minimum are
/// clamped first.
pub fn billable_weight(weight_kg: f64) -> f64 {
    let weight = weight_kg.max(MIN_WEIGHT_KG);
    let whole = weight.floor();
    let fraction = weight - whole;

    if fraction < FRACTION_EPSILON {
        whole
    } else if fraction <= BRACKET_KG + FRACTION_EPSILON {
        whole + BRACKET_KG
    } else {
        whole + 1.0
    }
}

pub fn bracket_count(billable_kg: f64) -> u64 {
    (billable_kg / BRACKET_KG).round() as u64
}

pub fn quote_air_freight(
    weight_kg: f64,
    service: AirService,
    origin: OriginCountry,
) -> Result<Quote, QuoteError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 || weight_kg > MAX_WEIGHT_KG {
        return Err(QuoteError::InvalidWeight);
    }

    let billable = billable_weight(weight_kg);
    let brackets = bracket_count(billable);
    let rate = service.rate_per_bracket();
    let total = (brackets as f64 * rate as f64).round() as i64;

    tracing::debug!(
        weight_kg,
        billable,
        brackets,
        total,
        "priced air freight shipment"
    );

    Ok(Quote {
        measure: Measure::WeightKg(weight_kg),
        service: service.service_type(),
        origin: origin.into(),
        rate_per_unit: rate,
        billable_units: billable,
        total_amount: total,
        currency: Currency::Xof,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::QuoteOrigin;

    #[test]
    fn fraction_up_to_half_rounds_to_next_half() {
        assert_eq!(billable_weight(2.3), 2.5);
        assert_eq!(billable_weight(2.5), 2.5);
        assert_eq!(billable_weight(10.01), 10.5);
    }

    #[test]
    fn fraction_above_half_rounds_to_next_kilogram() {
        assert_eq!(billable_weight(2.7), 3.0);
        assert_eq!(billable_weight(0.51), 1.0);
        assert_eq!(billable_weight(4.99), 5.0);
    }

    #[test]
    fn whole_weights_are_unchanged() {
        assert_eq!(billable_weight(3.0), 3.0);
        assert_eq!(billable_weight(12.0), 12.0);
    }

    #[test]
    fn tiny_weights_are_clamped_before_banding() {
        assert_eq!(billable_weight(0.01), 0.5);
        assert_eq!(billable_weight(0.1), 0.5);
    }

    #[test]
    fn normal_service_example() {
        let quote = quote_air_freight(2.3, AirService::Normal, OriginCountry::China).unwrap();
        assert_eq!(quote.billable_units, 2.5);
        assert_eq!(bracket_count(quote.billable_units), 5);
        assert_eq!(quote.rate_per_unit, 5_250);
        assert_eq!(quote.total_amount, 26_250);
        assert_eq!(quote.currency, Currency::Xof);
        assert_eq!(quote.service, ServiceType::AirNormal);
    }

    #[test]
    fn express_service_example() {
        let quote = quote_air_freight(2.7, AirService::Express, OriginCountry::Turkey).unwrap();
        assert_eq!(quote.billable_units, 3.0);
        assert_eq!(quote.total_amount, 45_000);
        assert_eq!(quote.origin, QuoteOrigin::Country(OriginCountry::Turkey));
    }

    #[test]
    fn rejects_non_positive_weight() {
        assert_eq!(
            quote_air_freight(0.0, AirService::Normal, OriginCountry::China),
            Err(QuoteError::InvalidWeight)
        );
        assert_eq!(
            quote_air_freight(f64::NAN, AirService::Normal, OriginCountry::China),
            Err(QuoteError::InvalidWeight)
        );
    }

    #[test]
    fn weights_above_the_ceiling_are_rejected() {
        let heaviest =
            quote_air_freight(MAX_WEIGHT_KG, AirService::Normal, OriginCountry::China).unwrap();
        assert_eq!(bracket_count(heaviest.billable_units), 20_000);
        assert_eq!(heaviest.total_amount, 105_000_000);

        assert_eq!(
            quote_air_freight(MAX_WEIGHT_KG + 0.1, AirService::Normal, OriginCountry::China),
            Err(QuoteError::InvalidWeight)
        );
        assert_eq!(
            quote_air_freight(3.0e10, AirService::Express, OriginCountry::China),
            Err(QuoteError::InvalidWeight)
        );
    }
}
