use std::future::Future;
use std::time::Duration;

use tracing::debug;

use super::domain::{DocumentUpload, PageScore};

#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("scoring request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("scoring service returned {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("invalid scoring response: {0}")]
    InvalidResponse(String),
}

/// Scores the last page of a document for the presence of a signature.
pub trait SignatureDetector: Send + Sync {
    fn score(
        &self,
        document: &DocumentUpload,
    ) -> impl Future<Output = Result<PageScore, DetectorError>> + Send;
}

/// Calls an HTTP scoring service that hosts the signature image model.
///
/// The document bytes are posted as the request body with their content type; the service
/// rasterises PDFs, scores the last page, and answers `{"pages": n, "signed_probability": p}`.
#[derive(Debug, Clone)]
pub struct HttpSignatureDetector {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSignatureDetector {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, DetectorError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SignatureDetector for HttpSignatureDetector {
    async fn score(&self, document: &DocumentUpload) -> Result<PageScore, DetectorError> {
        let content_type = document.content_type();
        debug!(
            endpoint = %self.endpoint,
            file = %document.file_name,
            content_type = %content_type,
            bytes = document.bytes.len(),
            "scoring document"
        );

        let resp = self
            .client
            .post(&self.endpoint)
            .query(&[("file_name", document.file_name.as_str())])
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(document.bytes.clone())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DetectorError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let score: PageScore = resp.json().await?;
        check_score(score)
    }
}

/// Rejects scores that cannot come from a probability model.
pub fn check_score(score: PageScore) -> Result<PageScore, DetectorError> {
    if score.pages == 0 {
        return Err(DetectorError::InvalidResponse(
            "document has no pages".to_string(),
        ));
    }
    if !score.signed_probability.is_finite() || !(0.0..=1.0).contains(&score.signed_probability)
    {
        return Err(DetectorError::InvalidResponse(format!(
            "signed probability {} outside [0, 1]",
            score.signed_probability
        )));
    }
    Ok(score)
}
