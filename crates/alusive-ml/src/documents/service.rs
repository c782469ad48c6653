use std::sync::Arc;

use tracing::info;

use super::detector::{DetectorError, SignatureDetector};
use super::domain::{
    ApplicantName, DocumentKind, SignatureAnalysis, ValidationOutcome, ValidationRequest,
};
use super::messages::{compose_messages, EMAIL_SUBJECT};
use crate::notify::{EmailMessage, Notifier, NotifyError};

pub const DEFAULT_SIGNATURE_THRESHOLD: f64 = 0.75;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid document type. Must be 'grant' or 'internship'.")]
    InvalidDocumentType(String),
    #[error("Full name must not be empty.")]
    EmptyName,
    #[error("Uploaded document is empty.")]
    EmptyDocument,
    #[error("Missing form field '{0}'.")]
    MissingField(&'static str),
    #[error("Malformed form data: {0}")]
    MalformedForm(String),
    #[error("Error processing document: {0}")]
    Processing(#[from] DetectorError),
    #[error("Error sending notification: {0}")]
    Notification(#[from] NotifyError),
}

impl ValidationError {
    /// Whether the failure was caused by the submitted form rather than a backend.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Processing(_) | Self::Notification(_))
    }
}

/// Sender and copy address for outbound notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationSettings {
    pub signature_threshold: f64,
    pub mail_from: String,
    pub copy_to: String,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            signature_threshold: DEFAULT_SIGNATURE_THRESHOLD,
            mail_from: "Alusive <alusiveafrica_rwa@alusiveafrica.org>".to_string(),
            copy_to: "alusiveafrica_rwa@alustudent.com".to_string(),
        }
    }
}

/// Checks uploaded agreements for a signature and tells the applicant the result.
pub struct DocumentValidationService<D, N> {
    detector: Arc<D>,
    notifier: Arc<N>,
    settings: ValidationSettings,
}

impl<D, N> DocumentValidationService<D, N>
where
    D: SignatureDetector,
    N: Notifier,
{
    pub fn new(detector: Arc<D>, notifier: Arc<N>, settings: ValidationSettings) -> Self {
        Self {
            detector,
            notifier,
            settings,
        }
    }

    pub async fn validate(
        &self,
        request: ValidationRequest,
    ) -> Result<ValidationOutcome, ValidationError> {
        let kind = DocumentKind::parse(&request.document_type)
            .ok_or_else(|| ValidationError::InvalidDocumentType(request.document_type.clone()))?;
        let name =
            ApplicantName::from_full_name(&request.full_name).ok_or(ValidationError::EmptyName)?;
        if request.document.bytes.is_empty() {
            return Err(ValidationError::EmptyDocument);
        }

        let score = self.detector.score(&request.document).await?;
        let result = SignatureAnalysis::from_score(score, self.settings.signature_threshold);
        let messages = compose_messages(&name, kind, result.prediction);

        let email = EmailMessage {
            from: self.settings.mail_from.clone(),
            to: vec![request.email.clone(), self.settings.copy_to.clone()],
            subject: EMAIL_SUBJECT.to_string(),
            html: messages.email,
        };
        self.notifier.send(&email).await?;

        info!(
            document_type = kind.as_str(),
            status = ?result.prediction,
            probability = result.signed_probability,
            pages = result.last_page_analysis.page,
            "validated uploaded document"
        );

        Ok(ValidationOutcome {
            full_name: request.full_name,
            email: request.email,
            document_type: kind,
            result,
            notification: messages.notification,
        })
    }
}
