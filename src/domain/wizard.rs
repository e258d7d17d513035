//! Supplier payment identity verification wizard.
//!
//! The wizard is a linear five-step machine. Each forward transition is
//! gated on the artifact its step collects; going back never discards data.

use thiserror::Error;

use super::{
    money::Currency,
    validation::{FieldError, Validator},
};

pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;
pub const ACCEPTED_DOCUMENT_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "pdf"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    #[default]
    UploadId,
    Selfie,
    PaymentDetails,
    Verify,
    Reference,
}

impl WizardStep {
    pub const ALL: [WizardStep; 5] = [
        WizardStep::UploadId,
        WizardStep::Selfie,
        WizardStep::PaymentDetails,
        WizardStep::Verify,
        WizardStep::Reference,
    ];

    /// One-based position shown to the user.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::UploadId => 1,
            WizardStep::Selfie => 2,
            WizardStep::PaymentDetails => 3,
            WizardStep::Verify => 4,
            WizardStep::Reference => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::UploadId => "Upload ID",
            WizardStep::Selfie => "Selfie",
            WizardStep::PaymentDetails => "Payment details",
            WizardStep::Verify => "Verification",
            WizardStep::Reference => "Reference",
        }
    }

    fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::UploadId => Some(WizardStep::Selfie),
            WizardStep::Selfie => Some(WizardStep::PaymentDetails),
            WizardStep::PaymentDetails => Some(WizardStep::Verify),
            WizardStep::Verify => Some(WizardStep::Reference),
            WizardStep::Reference => None,
        }
    }

    fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::UploadId => None,
            WizardStep::Selfie => Some(WizardStep::UploadId),
            WizardStep::PaymentDetails => Some(WizardStep::Selfie),
            WizardStep::Verify => Some(WizardStep::PaymentDetails),
            WizardStep::Reference => Some(WizardStep::Verify),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("Please upload an identity document first.")]
    MissingDocument,
    #[error("Please take a selfie before continuing.")]
    MissingSelfie,
    #[error("Please complete the payment details form.")]
    MissingPaymentDetails,
    #[error("Verification has not been confirmed yet.")]
    NotVerified,
    #[error("The wizard is already complete. Start a new request instead.")]
    AlreadyComplete,
    #[error("Unsupported document type. Use JPG, PNG or PDF.")]
    UnsupportedDocument,
    #[error("Document is larger than 10 MB.")]
    DocumentTooLarge,
    #[error("The captured image could not be read.")]
    InvalidSelfie,
    #[error("This action is not available on the {0} step.")]
    WrongStep(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentUpload {
    pub file_name: String,
    pub size_bytes: u64,
}

impl DocumentUpload {
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}

/// Raw inputs of the payment details form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentDetailsForm {
    pub supplier_name: String,
    pub supplier_email: String,
    pub account_number: String,
    pub amount: String,
    pub currency: Currency,
    pub purpose: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentDetails {
    pub supplier_name: String,
    pub supplier_email: String,
    pub account_number: String,
    pub amount: f64,
    pub currency: Currency,
    pub purpose: String,
}

impl PaymentDetailsForm {
    pub fn validate(&self) -> Result<PaymentDetails, Vec<FieldError>> {
        let account: String = self
            .account_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();
        let amount = self
            .amount
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0);

        let mut validator = Validator::new();
        validator
            .required("supplier_name", &self.supplier_name, "Supplier name")
            .min_chars("supplier_name", &self.supplier_name, 2, "Supplier name")
            .required("supplier_email", &self.supplier_email, "Supplier email")
            .email("supplier_email", &self.supplier_email)
            .required("account_number", &account, "Account number")
            .check(
                "account_number",
                (10..=34).contains(&account.len())
                    && account.chars().all(|c| c.is_ascii_alphanumeric()),
                "Account number must be 10 to 34 letters or digits (IBAN format).",
            )
            .check(
                "amount",
                amount.is_some(),
                "Amount must be a number greater than zero.",
            )
            .required("purpose", &self.purpose, "Payment purpose");
        validator.finish()?;

        Ok(PaymentDetails {
            supplier_name: self.supplier_name.trim().to_string(),
            supplier_email: self.supplier_email.trim().to_string(),
            account_number: account,
            amount: amount.unwrap_or_default(),
            currency: self.currency,
            purpose: self.purpose.trim().to_string(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerificationState {
    pub step: WizardStep,
    pub identity_document: Option<DocumentUpload>,
    pub selfie_data_url: Option<String>,
    pub payment_details: Option<PaymentDetails>,
    pub verified: bool,
    pub reference: Option<String>,
}

impl VerificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach_document(&mut self, document: DocumentUpload) -> Result<(), WizardError> {
        self.require_step(WizardStep::UploadId)?;
        let accepted = document
            .extension()
            .map(|ext| ACCEPTED_DOCUMENT_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false);
        if !accepted {
            return Err(WizardError::UnsupportedDocument);
        }
        if document.size_bytes > MAX_DOCUMENT_BYTES {
            return Err(WizardError::DocumentTooLarge);
        }
        self.identity_document = Some(document);
        Ok(())
    }

    pub fn attach_selfie(&mut self, data_url: String) -> Result<(), WizardError> {
        self.require_step(WizardStep::Selfie)?;
        if !data_url.starts_with("data:image/") || !data_url.contains(";base64,") {
            return Err(WizardError::InvalidSelfie);
        }
        self.selfie_data_url = Some(data_url);
        Ok(())
    }

    pub fn submit_payment_details(
        &mut self,
        form: &PaymentDetailsForm,
    ) -> Result<(), Vec<FieldError>> {
        self.require_step(WizardStep::PaymentDetails)
            .map_err(|err| vec![FieldError::new("step", err.to_string())])?;
        let details = form.validate()?;
        self.payment_details = Some(details);
        Ok(())
    }

    /// Records the outcome of the simulated identity check.
    pub fn mark_verified(&mut self) -> Result<(), WizardError> {
        self.require_step(WizardStep::Verify)?;
        self.verified = true;
        Ok(())
    }

    pub fn set_reference(&mut self, reference: String) -> Result<(), WizardError> {
        self.require_step(WizardStep::Reference)?;
        self.reference = Some(reference);
        Ok(())
    }

    pub fn can_advance(&self) -> Result<(), WizardError> {
        match self.step {
            WizardStep::UploadId if self.identity_document.is_none() => {
                Err(WizardError::MissingDocument)
            }
            WizardStep::Selfie if self.selfie_data_url.is_none() => Err(WizardError::MissingSelfie),
            WizardStep::PaymentDetails if self.payment_details.is_none() => {
                Err(WizardError::MissingPaymentDetails)
            }
            WizardStep::Verify if !self.verified => Err(WizardError::NotVerified),
            WizardStep::Reference => Err(WizardError::AlreadyComplete),
            _ => Ok(()),
        }
    }

    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        self.can_advance()?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Steps back without invalidating anything already collected.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_complete(&self) -> bool {
        self.reference.is_some()
    }

    fn require_step(&self, expected: WizardStep) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep(self.step.title()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passport() -> DocumentUpload {
        DocumentUpload {
            file_name: "passport.PDF".to_string(),
            size_bytes: 420_000,
        }
    }

    fn payment_form() -> PaymentDetailsForm {
        PaymentDetailsForm {
            supplier_name: "Guangzhou Trading Co".into(),
            supplier_email: "sales@gztrading.cn".into(),
            account_number: "CN12 3456 7890 1234".into(),
            amount: "1500,50".into(),
            currency: Currency::Usd,
            purpose: "Invoice 2291".into(),
        }
    }

    fn state_at_verify() -> VerificationState {
        let mut state = VerificationState::new();
        state.attach_document(passport()).unwrap();
        state.advance().unwrap();
        state
            .attach_selfie("data:image/jpeg;base64,AAAA".to_string())
            .unwrap();
        state.advance().unwrap();
        state.submit_payment_details(&payment_form()).unwrap();
        state.advance().unwrap();
        state
    }

    #[test]
    fn cannot_leave_upload_step_without_document() {
        let mut state = VerificationState::new();
        assert_eq!(state.advance(), Err(WizardError::MissingDocument));
        assert_eq!(state.step, WizardStep::UploadId);
    }

    #[test]
    fn cannot_leave_verify_step_until_verified() {
        let mut state = state_at_verify();
        assert_eq!(state.step, WizardStep::Verify);
        assert_eq!(state.advance(), Err(WizardError::NotVerified));
        assert_eq!(state.step, WizardStep::Verify);

        state.mark_verified().unwrap();
        assert_eq!(state.advance(), Ok(WizardStep::Reference));
    }

    #[test]
    fn full_flow_issues_reference_and_completes() {
        let mut state = state_at_verify();
        state.mark_verified().unwrap();
        state.advance().unwrap();
        state.set_reference("SP-0A1B2C3D".to_string()).unwrap();
        assert!(state.is_complete());
        assert_eq!(state.advance(), Err(WizardError::AlreadyComplete));

        let details = state.payment_details.as_ref().unwrap();
        assert_eq!(details.account_number, "CN12345678901234");
        assert_eq!(details.amount, 1500.5);
    }

    #[test]
    fn back_keeps_collected_data() {
        let mut state = state_at_verify();
        assert_eq!(state.back(), WizardStep::PaymentDetails);
        assert_eq!(state.back(), WizardStep::Selfie);
        assert!(state.identity_document.is_some());
        assert!(state.selfie_data_url.is_some());
        assert!(state.payment_details.is_some());
        assert_eq!(state.back(), WizardStep::UploadId);
        assert_eq!(state.back(), WizardStep::UploadId);
        assert_eq!(state.advance(), Ok(WizardStep::Selfie));
    }

    #[test]
    fn start_new_resets_everything() {
        let mut state = state_at_verify();
        state.reset();
        assert_eq!(state, VerificationState::default());
        assert_eq!(state.step.number(), 1);
    }

    #[test]
    fn rejects_bad_documents_and_selfies() {
        let mut state = VerificationState::new();
        let exe = DocumentUpload {
            file_name: "id.exe".into(),
            size_bytes: 10,
        };
        assert_eq!(state.attach_document(exe), Err(WizardError::UnsupportedDocument));
        let huge = DocumentUpload {
            file_name: "scan.png".into(),
            size_bytes: MAX_DOCUMENT_BYTES + 1,
        };
        assert_eq!(state.attach_document(huge), Err(WizardError::DocumentTooLarge));
        assert_eq!(
            state.attach_selfie("data:image/png;base64,AA".into()),
            Err(WizardError::WrongStep("Upload ID"))
        );

        state.attach_document(passport()).unwrap();
        state.advance().unwrap();
        assert_eq!(
            state.attach_selfie("https://example.com/me.jpg".into()),
            Err(WizardError::InvalidSelfie)
        );
        assert_eq!(state.advance(), Err(WizardError::MissingSelfie));
    }

    #[test]
    fn payment_form_reports_invalid_fields() {
        let form = PaymentDetailsForm {
            account_number: "12-34".into(),
            amount: "-4".into(),
            ..payment_form()
        };
        let errors = form.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["account_number", "amount"]);
    }

    #[test]
    fn payment_details_only_accepted_on_their_step() {
        let mut state = VerificationState::new();
        let errors = state.submit_payment_details(&payment_form()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "step");
        assert!(state.payment_details.is_none());

        let mut state = state_at_verify();
        assert!(state.submit_payment_details(&payment_form()).is_err());
        assert_eq!(state.step, WizardStep::Verify);
    }
}
