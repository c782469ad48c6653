use axum::body::Bytes;
use serde::{Deserialize, Serialize};

/// Kind of agreement an applicant uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Grant,
    Internship,
}

impl DocumentKind {
    /// Accepts only the exact lowercase labels.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "grant" => Some(Self::Grant),
            "internship" => Some(Self::Internship),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grant => "grant",
            Self::Internship => "internship",
        }
    }
}

/// Applicant name split for salutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantName {
    pub first_name: String,
    pub last_name: String,
}

impl ApplicantName {
    /// First whitespace-separated token is the first name; the rest, joined by single spaces,
    /// is the last name. Returns `None` for a blank name.
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        let mut parts = full_name.split_whitespace();
        let first_name = parts.next()?.to_string();
        let last_name = parts.collect::<Vec<_>>().join(" ");
        Some(Self {
            first_name,
            last_name,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Signed,
    Unsigned,
}

impl DocumentStatus {
    pub const fn from_signed(signed: bool) -> Self {
        if signed {
            Self::Signed
        } else {
            Self::Unsigned
        }
    }
}

/// An uploaded document as received from the applicant.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl DocumentUpload {
    /// Declared content type, or one guessed from the file extension when the client sent none
    /// or a generic binary type.
    pub fn content_type(&self) -> String {
        match self.content_type.as_deref() {
            Some(declared) if !declared.is_empty() && declared != "application/octet-stream" => {
                declared.to_string()
            }
            _ => mime_guess::from_path(&self.file_name)
                .first_or_octet_stream()
                .to_string(),
        }
    }
}

/// Scoring result for the last page of a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageScore {
    pub pages: usize,
    pub signed_probability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LastPageAnalysis {
    pub page: usize,
    pub signed: bool,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignatureAnalysis {
    pub prediction: DocumentStatus,
    pub signed_probability: f64,
    pub last_page_analysis: LastPageAnalysis,
}

impl SignatureAnalysis {
    /// Signed only when the probability is strictly above `threshold`.
    pub fn from_score(score: PageScore, threshold: f64) -> Self {
        let signed = score.signed_probability > threshold;
        Self {
            prediction: DocumentStatus::from_signed(signed),
            signed_probability: score.signed_probability,
            last_page_analysis: LastPageAnalysis {
                page: score.pages,
                signed,
                confidence: score.signed_probability,
            },
        }
    }
}

/// Form submitted to the validation endpoint.
#[derive(Debug, Clone)]
pub struct ValidationRequest {
    pub full_name: String,
    pub email: String,
    pub document_type: String,
    pub document: DocumentUpload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub full_name: String,
    pub email: String,
    pub document_type: DocumentKind,
    pub result: SignatureAnalysis,
    pub notification: String,
}
