use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::{error, warn};

use super::detector::SignatureDetector;
use super::domain::{DocumentUpload, ValidationRequest};
use super::service::{DocumentValidationService, ValidationError};
use crate::notify::Notifier;

pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Router exposing the document validation endpoint.
pub fn document_router<D, N>(service: Arc<DocumentValidationService<D, N>>) -> Router
where
    D: SignatureDetector + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route("/validate", post(validate_handler::<D, N>))
        .route("/validate/", post(validate_handler::<D, N>))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(service)
}

pub(crate) async fn validate_handler<D, N>(
    State(service): State<Arc<DocumentValidationService<D, N>>>,
    multipart: Multipart,
) -> Response
where
    D: SignatureDetector + 'static,
    N: Notifier + 'static,
{
    let outcome = match read_form(multipart).await {
        Ok(request) => service.validate(request).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(err) if err.is_client_error() => {
            warn!(error = %err, "rejected document upload");
            let payload = json!({ "detail": err.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(err) => {
            error!(error = %err, "document validation failed");
            let payload = json!({ "detail": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

async fn read_form(mut multipart: Multipart) -> Result<ValidationRequest, ValidationError> {
    let malformed = |e: axum::extract::multipart::MultipartError| {
        ValidationError::MalformedForm(e.body_text())
    };

    let mut document = None;
    let mut full_name = None;
    let mut email = None;
    let mut document_type = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "document" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(malformed)?;
                document = Some(DocumentUpload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            "full_name" => full_name = Some(field.text().await.map_err(malformed)?),
            "email" => email = Some(field.text().await.map_err(malformed)?),
            "document_type" => document_type = Some(field.text().await.map_err(malformed)?),
            _ => {}
        }
    }

    Ok(ValidationRequest {
        document: document.ok_or(ValidationError::MissingField("document"))?,
        full_name: full_name.ok_or(ValidationError::MissingField("full_name"))?,
        email: email.ok_or(ValidationError::MissingField("email"))?,
        document_type: document_type.ok_or(ValidationError::MissingField("document_type"))?,
    })
}
