//! Ocean consolidation volumetric pricing.

use super::{
    money::Currency,
    quote::{Measure, OriginCountry, Quote, QuoteError, ServiceType},
};

pub const CM3_PER_M3: f64 = 1_000_000.0;
pub const SMALL_VOLUME_RATE: i64 = 280_000;
pub const LARGE_VOLUME_RATE: i64 = 245_000;
pub const LARGE_VOLUME_THRESHOLD_M3: f64 = 1.0;

/// Package dimensions in centimeters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl Dimensions {
    pub fn volume_m3(&self) -> Result<f64, QuoteError> {
        for (label, value) in [
            ("Length", self.length_cm),
            ("Width", self.width_cm),
            ("Height", self.height_cm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(QuoteError::InvalidDimension(label));
            }
        }
        Ok(self.length_cm * self.width_cm * self.height_cm / CM3_PER_M3)
    }
}

/// Parses the three dimension inputs; returns `None` until all are filled.
pub fn dimensions_from_inputs(length: &str, width: &str, height: &str) -> Option<Dimensions> {
    let parse = |raw: &str| raw.trim().parse::<f64>().ok().filter(|v| *v > 0.0);
    Some(Dimensions {
        length_cm: parse(length)?,
        width_cm: parse(width)?,
        height_cm: parse(height)?,
    })
}

pub fn rate_per_cbm(volume_m3: f64) -> i64 {
    if volume_m3 < LARGE_VOLUME_THRESHOLD_M3 {
        SMALL_VOLUME_RATE
    } else {
        LARGE_VOLUME_RATE
    }
}

pub fn quote_ocean_consolidation(
    volume_m3: f64,
    origin: OriginCountry,
) -> Result<Quote, QuoteError> {
    if !volume_m3.is_finite() || volume_m3 <= 0.0 {
        return Err(QuoteError::InvalidVolume);
    }

    let rate = rate_per_cbm(volume_m3);
    let total = (rate as f64 * volume_m3).round() as i64;

    tracing::debug!(volume_m3, rate, total, "priced ocean consolidation");

    Ok(Quote {
        measure: Measure::VolumeCbm(volume_m3),
        service: ServiceType::OceanConsolidation,
        origin: origin.into(),
        rate_per_unit: rate,
        billable_units: volume_m3,
        total_amount: total,
        currency: Currency::Xof,
    })
}

/// Prices the exact volume of the package, never a rounded copy of it.
pub fn quote_from_dimensions(
    dimensions: &Dimensions,
    origin: OriginCountry,
) -> Result<Quote, QuoteError> {
    quote_ocean_consolidation(dimensions.volume_m3()?, origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_meter_cube_hits_the_large_tier() {
        let dims = Dimensions {
            length_cm: 100.0,
            width_cm: 100.0,
            height_cm: 100.0,
        };
        let volume = dims.volume_m3().unwrap();
        assert_eq!(volume, 1.0);
        assert_eq!(rate_per_cbm(volume), 245_000);

        let quote = quote_ocean_consolidation(volume, OriginCountry::China).unwrap();
        assert_eq!(quote.total_amount, 245_000);
    }

    #[test]
    fn small_volumes_use_the_higher_rate() {
        let quote = quote_ocean_consolidation(0.5, OriginCountry::France).unwrap();
        assert_eq!(quote.rate_per_unit, SMALL_VOLUME_RATE);
        assert_eq!(quote.total_amount, 140_000);
    }

    #[test]
    fn large_volume_total_is_rounded() {
        let quote = quote_ocean_consolidation(2.345, OriginCountry::Dubai).unwrap();
        assert_eq!(quote.rate_per_unit, LARGE_VOLUME_RATE);
        assert_eq!(quote.total_amount, 574_525);
    }

    #[test]
    fn rejects_invalid_dimensions() {
        let dims = Dimensions {
            length_cm: 50.0,
            width_cm: 0.0,
            height_cm: 20.0,
        };
        assert_eq!(dims.volume_m3(), Err(QuoteError::InvalidDimension("Width")));
        assert_eq!(
            quote_ocean_consolidation(0.0, OriginCountry::China),
            Err(QuoteError::InvalidVolume)
        );
    }

    #[test]
    fn parses_partial_inputs_as_missing() {
        assert!(dimensions_from_inputs("120", "", "80").is_none());
        let dims = dimensions_from_inputs("120", " 80", "50 ").unwrap();
        assert!((dims.volume_m3().unwrap() - 0.48).abs() < 1e-12);
    }

    #[test]
    fn small_parcels_price_from_their_exact_volume() {
        let dims = dimensions_from_inputs("5", "5", "5").unwrap();
        let quote = quote_from_dimensions(&dims, OriginCountry::China).unwrap();
        assert!((quote.billable_units - 0.000_125).abs() < 1e-15);
        assert_eq!(quote.rate_per_unit, SMALL_VOLUME_RATE);
        assert_eq!(quote.total_amount, 35);
    }

    #[test]
    fn fractional_sides_are_not_truncated_before_pricing() {
        let dims = dimensions_from_inputs("33.3", "33.3", "33.3").unwrap();
        let quote = quote_from_dimensions(&dims, OriginCountry::Turkey).unwrap();
        assert_eq!(quote.total_amount, 10_339);
    }

    #[test]
    fn dimension_errors_surface_from_the_quote() {
        let dims = Dimensions {
            length_cm: 40.0,
            width_cm: 30.0,
            height_cm: f64::INFINITY,
        };
        assert_eq!(
            quote_from_dimensions(&dims, OriginCountry::China),
            Err(QuoteError::InvalidDimension("Height"))
        );
    }
}
