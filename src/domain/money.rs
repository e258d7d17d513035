//! Currencies and the fixed conversion constants used across price displays.

use std::fmt;

use serde::{Deserialize, Serialize};

/// XOF is pegged to the euro.
pub const XOF_PER_EUR: f64 = 655.957;
pub const USD_PER_EUR: f64 = 1.08;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Xof,
    Eur,
    Usd,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Xof, Currency::Eur, Currency::Usd];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Xof => "XOF",
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Units of this currency for one euro.
    pub fn per_eur(&self) -> f64 {
        match self {
            Currency::Xof => XOF_PER_EUR,
            Currency::Eur => 1.0,
            Currency::Usd => USD_PER_EUR,
        }
    }

    /// XOF has no minor unit in everyday use.
    pub fn decimals(&self) -> usize {
        match self {
            Currency::Xof => 0,
            Currency::Eur | Currency::Usd => 2,
        }
    }

    pub fn round(&self, amount: f64) -> f64 {
        let factor = 10_f64.powi(self.decimals() as i32);
        (amount * factor).round() / factor
    }

    pub fn format(&self, amount: f64) -> String {
        let rounded = self.round(amount);
        let grouped = group_thousands(rounded, self.decimals());
        match self {
            Currency::Xof => format!("{grouped} FCFA"),
            Currency::Eur => format!("€{grouped}"),
            Currency::Usd => format!("${grouped}"),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Converts between the three display currencies through the euro.
pub fn convert(amount: f64, from: Currency, to: Currency) -> f64 {
    if from == to {
        return amount;
    }
    amount / from.per_eur() * to.per_eur()
}

/// Converts and formats in one go for price displays.
pub fn format_in(amount: f64, from: Currency, to: Currency) -> String {
    to.format(convert(amount, from, to))
}

fn group_thousands(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_through_the_euro() {
        assert_eq!(convert(1.0, Currency::Eur, Currency::Xof), XOF_PER_EUR);
        assert_eq!(convert(655.957, Currency::Xof, Currency::Eur), 1.0);
        let usd = convert(100.0, Currency::Eur, Currency::Usd);
        assert!((usd - 108.0).abs() < 1e-9);
        assert_eq!(convert(42.0, Currency::Usd, Currency::Usd), 42.0);
    }

    #[test]
    fn formats_each_currency() {
        assert_eq!(Currency::Xof.format(26250.0), "26 250 FCFA");
        assert_eq!(Currency::Xof.format(999.6), "1 000 FCFA");
        assert_eq!(Currency::Eur.format(1234.5), "€1 234.50");
        assert_eq!(Currency::Usd.format(0.0), "$0.00");
        assert_eq!(format_in(655_957.0, Currency::Xof, Currency::Eur), "€1 000.00");
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Currency::from_code("eur"), Some(Currency::Eur));
        assert_eq!(Currency::from_code(" XOF "), Some(Currency::Xof));
        assert_eq!(Currency::from_code("GBP"), None);
    }
}
