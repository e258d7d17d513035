//! Simulated backend for submissions, identity checks and tracking lookups.
//!
//! - Every call waits a fixed delay to stand in for a network round trip.
//! - Nothing is stored; references are generated locally.

use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::domain::{
    generate_reference, tracking, BookingRequest, ReferenceKind, TrackingEvent, VerificationState,
};

pub const BOOKING_DELAY: Duration = Duration::from_millis(1_000);
pub const VERIFICATION_DELAY: Duration = Duration::from_millis(2_500);
pub const REFERENCE_DELAY: Duration = Duration::from_millis(1_500);
pub const TRACKING_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("cannot verify yet: {0} is missing")]
    Incomplete(&'static str),
    #[error("tracking number {0} is not valid (expected e.g. SH-7F3A91C2)")]
    InvalidTrackingNumber(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingReceipt {
    pub reference: String,
    pub mailto: String,
}

#[derive(Clone, Debug)]
pub struct MockBackend {
    booking_delay: Duration,
    verification_delay: Duration,
    reference_delay: Duration,
    tracking_delay: Duration,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            booking_delay: BOOKING_DELAY,
            verification_delay: VERIFICATION_DELAY,
            reference_delay: REFERENCE_DELAY,
            tracking_delay: TRACKING_DELAY,
        }
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a booking reference and the `mailto:` link to open.
    pub async fn submit_booking(&self, request: &BookingRequest) -> BookingReceipt {
        tokio::time::sleep(self.booking_delay).await;
        let reference = generate_reference(ReferenceKind::Booking);
        info!(%reference, service = request.service.label(), "booking request prepared");
        BookingReceipt {
            mailto: request.mailto_link(&reference),
            reference,
        }
    }

    /// Pretends to match the selfie against the identity document.
    pub async fn verify_identity(&self, state: &VerificationState) -> Result<(), BackendError> {
        let document = state
            .identity_document
            .as_ref()
            .ok_or(BackendError::Incomplete("identity document"))?;
        if state.selfie_data_url.is_none() {
            return Err(BackendError::Incomplete("selfie"));
        }
        if state.payment_details.is_none() {
            return Err(BackendError::Incomplete("payment details"));
        }

        tokio::time::sleep(self.verification_delay).await;
        info!(document = %document.file_name, "identity verification approved");
        Ok(())
    }

    pub async fn issue_payment_reference(&self) -> String {
        tokio::time::sleep(self.reference_delay).await;
        let reference = generate_reference(ReferenceKind::SupplierPayment);
        info!(%reference, "supplier payment reference issued");
        reference
    }

    pub async fn lookup_tracking(
        &self,
        tracking_number: &str,
    ) -> Result<(String, Vec<TrackingEvent>), BackendError> {
        let normalized = tracking::normalize_tracking_number(tracking_number)
            .ok_or_else(|| BackendError::InvalidTrackingNumber(tracking_number.trim().to_string()))?;
        tokio::time::sleep(self.tracking_delay).await;
        info!(tracking_number = %normalized, "tracking lookup served from sample data");
        Ok((normalized, tracking::sample_timeline()))
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;
    use crate::domain::{Currency, DocumentUpload, PaymentDetailsForm};

    fn ready_state() -> VerificationState {
        let mut state = VerificationState::new();
        state
            .attach_document(DocumentUpload {
                file_name: "id.png".into(),
                size_bytes: 1_024,
            })
            .unwrap();
        state.advance().unwrap();
        state
            .attach_selfie("data:image/jpeg;base64,AAAA".into())
            .unwrap();
        state.advance().unwrap();
        state
            .submit_payment_details(&PaymentDetailsForm {
                supplier_name: "Acme Textiles".into(),
                supplier_email: "pay@acme.example".into(),
                account_number: "TR330006100519786457841326".into(),
                amount: "900".into(),
                currency: Currency::Eur,
                purpose: "Order 17".into(),
            })
            .unwrap();
        state.advance().unwrap();
        state
    }

    #[tokio::test(start_paused = true)]
    async fn verification_waits_the_fixed_delay() {
        let backend = MockBackend::new();
        let started = Instant::now();
        backend.verify_identity(&ready_state()).await.unwrap();
        assert!(started.elapsed() >= VERIFICATION_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn verification_refuses_incomplete_state() {
        let backend = MockBackend::new();
        let result = backend.verify_identity(&VerificationState::new()).await;
        assert_eq!(result, Err(BackendError::Incomplete("identity document")));
    }

    #[tokio::test(start_paused = true)]
    async fn booking_receipt_links_reference() {
        let backend = MockBackend::new();
        let request = BookingRequest {
            full_name: "Ama".into(),
            ..BookingRequest::default()
        };
        let receipt = backend.submit_booking(&request).await;
        assert!(receipt.reference.starts_with("BK-"));
        assert!(receipt.mailto.contains(&receipt.reference));
    }

    #[tokio::test(start_paused = true)]
    async fn tracking_lookup_validates_number() {
        let backend = MockBackend::new();
        let (number, events) = backend.lookup_tracking("sh-19b04d7e").await.unwrap();
        assert_eq!(number, "SH-19B04D7E");
        assert!(!events.is_empty());

        assert_eq!(
            backend.lookup_tracking(" nope ").await,
            Err(BackendError::InvalidTrackingNumber("nope".into()))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn payment_references_use_supplier_prefix() {
        let reference = MockBackend::new().issue_payment_reference().await;
        assert!(reference.starts_with("SP-"));
    }
}
