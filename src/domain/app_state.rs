use serde::{Deserialize, Serialize};

use super::{booking::BookingService, money::Currency, quote::Quote};

/// Contact details used to prefill the booking and payment forms.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDefaults {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Currency every price is displayed in.
    pub display_currency: Currency,
    pub contact: ContactDefaults,
    /// Latest calculator result; feeds the payment page.
    pub last_quote: Option<Quote>,
    pub last_booking_reference: Option<String>,
}

impl AppState {
    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.display_currency = persisted.display_currency;
        self.contact = persisted.contact;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            display_currency: self.display_currency,
            contact: self.contact.clone(),
        }
    }

    pub fn record_quote(&mut self, quote: Quote) {
        self.last_quote = Some(quote);
    }

    /// Stores the booking reference. A quote priced for another service is
    /// dropped so the payment page never charges it against this booking.
    pub fn record_booking(&mut self, service: BookingService, reference: String) {
        if self
            .last_quote
            .as_ref()
            .is_some_and(|quote| quote.service.booking_service() != service)
        {
            self.last_quote = None;
        }
        self.last_booking_reference = Some(reference);
    }
}

/// Preferences written to the config directory. Quotes and wizard progress
/// are never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub display_currency: Currency,
    #[serde(default)]
    pub contact: ContactDefaults,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_state_only_carries_preferences() {
        let mut state = AppState {
            display_currency: Currency::Eur,
            contact: ContactDefaults {
                full_name: "Kofi".into(),
                email: "kofi@example.com".into(),
                phone: String::new(),
            },
            ..AppState::default()
        };
        let snapshot = state.to_persisted();

        state.display_currency = Currency::Usd;
        state.apply_persisted(snapshot.clone());
        assert_eq!(state.display_currency, Currency::Eur);
        assert_eq!(state.contact.full_name, "Kofi");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, PersistedState::default());
        assert_eq!(parsed.display_currency, Currency::Xof);
    }

    #[test]
    fn booking_another_service_drops_the_priced_quote() {
        let air = crate::domain::quote_air_freight(
            2.3,
            crate::domain::AirService::Normal,
            crate::domain::OriginCountry::China,
        )
        .unwrap();
        let mut state = AppState::default();

        state.record_quote(air.clone());
        state.record_booking(BookingService::AirFreight, "BK-AAAA1111".into());
        assert_eq!(state.last_quote, Some(air.clone()));

        state.record_booking(BookingService::Pallet, "BK-BBBB2222".into());
        assert_eq!(state.last_quote, None);
        assert_eq!(state.last_booking_reference.as_deref(), Some("BK-BBBB2222"));
    }
}
