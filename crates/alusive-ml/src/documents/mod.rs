//! Signed-agreement validation for grant and internship documents.

pub mod detector;
pub mod domain;
pub mod messages;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use detector::{check_score, DetectorError, HttpSignatureDetector, SignatureDetector};
pub use domain::{
    ApplicantName, DocumentKind, DocumentStatus, DocumentUpload, LastPageAnalysis, PageScore,
    SignatureAnalysis, ValidationOutcome, ValidationRequest,
};
pub use messages::{compose_messages, DocumentMessages, EMAIL_SUBJECT};
pub use router::{document_router, MAX_UPLOAD_BYTES};
pub use service::{
    DocumentValidationService, ValidationError, ValidationSettings, DEFAULT_SIGNATURE_THRESHOLD,
};
