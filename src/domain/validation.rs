//! Field-level validation shared by the booking and supplier payment forms.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Collects field errors in form order.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(&mut self, field: &'static str, ok: bool, message: &str) -> &mut Self {
        if !ok && !self.has_error(field) {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    pub fn required(&mut self, field: &'static str, value: &str, label: &str) -> &mut Self {
        self.check(field, !value.trim().is_empty(), &format!("{label} is required."))
    }

    pub fn min_chars(&mut self, field: &'static str, value: &str, min: usize, label: &str) -> &mut Self {
        self.check(
            field,
            value.trim().chars().count() >= min,
            &format!("{label} must be at least {min} characters."),
        )
    }

    pub fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        self.check(field, is_valid_email(value), "Enter a valid email address.")
    }

    pub fn phone(&mut self, field: &'static str, value: &str) -> &mut Self {
        self.check(
            field,
            is_valid_phone(value),
            "Enter a phone number with 8 to 15 digits.",
        )
    }

    fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    pub fn finish(&mut self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }
}

pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|error| error.field == field)
        .map(|error| error.message.as_str())
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
            .expect("email pattern compiles")
    })
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^\+?[0-9]{8,15}$").expect("phone pattern compiles"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value.trim())
}

/// Spaces, dots and dashes are ignored so "+228 90 12 34 56" passes.
pub fn is_valid_phone(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.'))
        .collect();
    phone_regex().is_match(&compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_patterns() {
        assert!(is_valid_email("bookings@example.tg"));
        assert!(is_valid_email(" a.b+c@mail.example.com "));
        assert!(!is_valid_email("nobody@"));
        assert!(!is_valid_email("no at sign.com"));
    }

    #[test]
    fn phone_patterns() {
        assert!(is_valid_phone("+228 90 12 34 56"));
        assert!(is_valid_phone("0033-612-345-678"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("+228 ABC"));
    }

    #[test]
    fn keeps_first_error_per_field() {
        let mut validator = Validator::new();
        validator
            .required("name", "", "Name")
            .min_chars("name", "", 2, "Name")
            .email("email", "bad");
        let errors = validator.finish().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(error_for(&errors, "name"), Some("Name is required."));
        assert_eq!(
            error_for(&errors, "email"),
            Some("Enter a valid email address.")
        );
    }
}
