//! Booking requests and their `mailto:` submission.

use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date};
use url::form_urlencoded::byte_serialize;

use super::validation::{FieldError, Validator};

pub const BOOKINGS_EMAIL: &str = "bookings@shippingdesk.tg";
pub const MAX_PASSENGERS: u32 = 9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingService {
    #[default]
    AirFreight,
    OceanConsolidation,
    Pallet,
    PassengerCrossing,
}

impl BookingService {
    pub const ALL: [BookingService; 4] = [
        BookingService::AirFreight,
        BookingService::OceanConsolidation,
        BookingService::Pallet,
        BookingService::PassengerCrossing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BookingService::AirFreight => "Air freight",
            BookingService::OceanConsolidation => "Ocean consolidation",
            BookingService::Pallet => "Pallet shipping",
            BookingService::PassengerCrossing => "Passenger crossing",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            BookingService::AirFreight => "air",
            BookingService::OceanConsolidation => "ocean",
            BookingService::Pallet => "pallet",
            BookingService::PassengerCrossing => "passenger",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.slug() == slug)
    }

    pub fn carries_passengers(&self) -> bool {
        matches!(self, BookingService::PassengerCrossing)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub service: BookingService,
    pub origin: String,
    pub destination: String,
    pub cargo_description: String,
    /// `YYYY-MM-DD`, as produced by a date input.
    pub preferred_date: String,
    pub passengers: String,
}

pub fn parse_form_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

impl BookingRequest {
    pub fn validate(&self, today: Date) -> Result<(), Vec<FieldError>> {
        let mut validator = Validator::new();
        validator
            .required("full_name", &self.full_name, "Full name")
            .min_chars("full_name", &self.full_name, 2, "Full name")
            .required("email", &self.email, "Email")
            .email("email", &self.email)
            .required("phone", &self.phone, "Phone")
            .phone("phone", &self.phone)
            .required("origin", &self.origin, "Origin")
            .required("destination", &self.destination, "Destination")
            .check(
                "destination",
                !self.origin.trim().eq_ignore_ascii_case(self.destination.trim()),
                "Destination must differ from origin.",
            );

        if self.service.carries_passengers() {
            let passengers = self.passengers.trim().parse::<u32>().unwrap_or(0);
            validator.check(
                "passengers",
                (1..=MAX_PASSENGERS).contains(&passengers),
                &format!("Passengers must be between 1 and {MAX_PASSENGERS}."),
            );
        } else {
            validator.min_chars(
                "cargo_description",
                &self.cargo_description,
                10,
                "Cargo description",
            );
        }

        match parse_form_date(&self.preferred_date) {
            Some(date) => {
                validator.check(
                    "preferred_date",
                    date >= today,
                    "Preferred date cannot be in the past.",
                );
            }
            None => {
                validator.check("preferred_date", false, "Pick a preferred date.");
            }
        }

        validator.finish()
    }

    pub fn email_subject(&self, reference: &str) -> String {
        format!("Booking request {reference} - {}", self.service.label())
    }

    pub fn email_body(&self, reference: &str) -> String {
        let mut lines = vec![
            format!("Reference: {reference}"),
            format!("Service: {}", self.service.label()),
            format!("Name: {}", self.full_name.trim()),
            format!("Email: {}", self.email.trim()),
            format!("Phone: {}", self.phone.trim()),
            format!("From: {}", self.origin.trim()),
            format!("To: {}", self.destination.trim()),
            format!("Preferred date: {}", self.preferred_date.trim()),
        ];
        if self.service.carries_passengers() {
            lines.push(format!("Passengers: {}", self.passengers.trim()));
        } else {
            lines.push(format!("Cargo: {}", self.cargo_description.trim()));
        }
        lines.join("\n")
    }

    /// Builds the pre-filled `mailto:` link opened on submission.
    pub fn mailto_link(&self, reference: &str) -> String {
        format!(
            "mailto:{BOOKINGS_EMAIL}?subject={}&body={}",
            percent_encode(&self.email_subject(reference)),
            percent_encode(&self.email_body(reference)),
        )
    }
}

/// Mail clients expect `%20`, not the `+` form encoding produces.
fn percent_encode(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn valid_request() -> BookingRequest {
        BookingRequest {
            full_name: "Ama Mensah".into(),
            email: "ama@example.com".into(),
            phone: "+228 90 00 00 00".into(),
            service: BookingService::AirFreight,
            origin: "Guangzhou".into(),
            destination: "Lomé".into(),
            cargo_description: "Two cartons of phone accessories".into(),
            preferred_date: "2026-11-02".into(),
            passengers: String::new(),
        }
    }

    #[test]
    fn accepts_a_complete_request() {
        assert_eq!(valid_request().validate(date!(2026 - 10 - 19)), Ok(()));
    }

    #[test]
    fn reports_each_invalid_field() {
        let request = BookingRequest {
            email: "ama-at-example".into(),
            destination: "guangzhou".into(),
            preferred_date: "2026-10-01".into(),
            cargo_description: "box".into(),
            ..valid_request()
        };
        let errors = request.validate(date!(2026 - 10 - 19)).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["email", "destination", "cargo_description", "preferred_date"]
        );
    }

    #[test]
    fn passenger_bookings_need_a_head_count() {
        let request = BookingRequest {
            service: BookingService::PassengerCrossing,
            cargo_description: String::new(),
            passengers: "0".into(),
            ..valid_request()
        };
        let errors = request.validate(date!(2026 - 10 - 19)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "passengers");

        let request = BookingRequest {
            passengers: "3".into(),
            ..request
        };
        assert!(request.validate(date!(2026 - 10 - 19)).is_ok());
    }

    #[test]
    fn mailto_link_is_encoded_and_carries_reference() {
        let link = valid_request().mailto_link("BK-1A2B3C4D");
        assert!(link.starts_with("mailto:bookings@shippingdesk.tg?subject="));
        assert!(link.contains("Booking%20request%20BK-1A2B3C4D"));
        assert!(link.contains("&body=Reference%3A%20BK-1A2B3C4D%0AService"));
        assert!(!link.contains(' '));
        assert!(!link.contains('+'));
    }
}
