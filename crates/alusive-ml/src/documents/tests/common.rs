use std::sync::{Arc, Mutex};

use axum::body::Bytes;

use crate::documents::detector::{DetectorError, SignatureDetector};
use crate::documents::domain::{DocumentUpload, PageScore, ValidationRequest};
use crate::documents::service::{DocumentValidationService, ValidationSettings};
use crate::notify::{EmailMessage, Notifier, NotifyError};

/// Detector returning a fixed score for every document.
pub(super) struct FixedDetector {
    pub(super) score: PageScore,
}

impl FixedDetector {
    pub(super) fn with_probability(signed_probability: f64) -> Self {
        Self {
            score: PageScore {
                pages: 2,
                signed_probability,
            },
        }
    }
}

impl SignatureDetector for FixedDetector {
    async fn score(&self, _document: &DocumentUpload) -> Result<PageScore, DetectorError> {
        Ok(self.score)
    }
}

pub(super) struct FailingDetector;

impl SignatureDetector for FailingDetector {
    async fn score(&self, _document: &DocumentUpload) -> Result<PageScore, DetectorError> {
        Err(DetectorError::InvalidResponse("unreadable image".to_string()))
    }
}

/// Notifier that keeps every message it is asked to send.
#[derive(Default)]
pub(super) struct RecordingNotifier {
    pub(super) sent: Mutex<Vec<EmailMessage>>,
    pub(super) fail: bool,
}

impl RecordingNotifier {
    pub(super) fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub(super) fn messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().expect("lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::Rejected {
                status: 422,
                body: "invalid recipient".to_string(),
            });
        }
        self.sent.lock().expect("lock").push(message.clone());
        Ok(())
    }
}

pub(super) fn settings() -> ValidationSettings {
    ValidationSettings {
        signature_threshold: 0.75,
        mail_from: "Alusive <noreply@alusive.test>".to_string(),
        copy_to: "records@alusive.test".to_string(),
    }
}

pub(super) fn service_with<D>(
    detector: D,
    notifier: Arc<RecordingNotifier>,
) -> DocumentValidationService<D, RecordingNotifier>
where
    D: SignatureDetector,
{
    DocumentValidationService::new(Arc::new(detector), notifier, settings())
}

pub(super) fn request(full_name: &str, document_type: &str) -> ValidationRequest {
    ValidationRequest {
        full_name: full_name.to_string(),
        email: "amina@example.com".to_string(),
        document_type: document_type.to_string(),
        document: DocumentUpload {
            file_name: "agreement.pdf".to_string(),
            content_type: Some("application/pdf".to_string()),
            bytes: Bytes::from_static(b"%PDF-1.4 test"),
        },
    }
}
