//! Card payment gateway stub.
//!
//! The checkout is wired to a placeholder publishable key, so every charge
//! attempt ends with [`PaymentError::GatewayNotConfigured`] after the usual
//! processing delay. No money ever moves.

use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::domain::{Currency, PaymentSplit};

pub const PLACEHOLDER_PUBLISHABLE_KEY: &str = "pk_test_placeholder_replace_me";
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1_200);

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PaymentError {
    #[error("Online payment is not enabled yet (gateway key {key}). Please pay at the agency.")]
    GatewayNotConfigured { key: &'static str },
    #[error("Nothing to pay: the amount must be greater than zero.")]
    InvalidAmount,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChargeRequest {
    pub reference: String,
    pub amount: i64,
    pub currency: Currency,
}

impl ChargeRequest {
    pub fn deposit(reference: impl Into<String>, split: &PaymentSplit) -> Self {
        Self {
            reference: reference.into(),
            amount: split.initial_payment,
            currency: split.currency,
        }
    }
}

#[derive(Clone, Debug)]
pub struct StubPaymentGateway {
    publishable_key: &'static str,
}

impl Default for StubPaymentGateway {
    fn default() -> Self {
        Self {
            publishable_key: PLACEHOLDER_PUBLISHABLE_KEY,
        }
    }
}

impl StubPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publishable_key(&self) -> &'static str {
        self.publishable_key
    }

    pub async fn charge(&self, request: &ChargeRequest) -> Result<(), PaymentError> {
        if request.amount <= 0 {
            return Err(PaymentError::InvalidAmount);
        }

        tokio::time::sleep(PROCESSING_DELAY).await;
        warn!(
            reference = %request.reference,
            amount = request.amount,
            currency = request.currency.code(),
            "payment gateway is a stub; charge declined"
        );
        Err(PaymentError::GatewayNotConfigured {
            key: self.publishable_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn charges_never_complete() {
        let split = PaymentSplit::from_total(45_000, Currency::Xof);
        let request = ChargeRequest::deposit("BK-00000000", &split);
        assert_eq!(request.amount, 22_500);

        let result = StubPaymentGateway::new().charge(&request).await;
        assert_eq!(
            result,
            Err(PaymentError::GatewayNotConfigured {
                key: PLACEHOLDER_PUBLISHABLE_KEY
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn zero_amounts_are_rejected_immediately() {
        let request = ChargeRequest {
            reference: "BK-00000000".into(),
            amount: 0,
            currency: Currency::Eur,
        };
        assert_eq!(
            StubPaymentGateway::new().charge(&request).await,
            Err(PaymentError::InvalidAmount)
        );
    }
}
