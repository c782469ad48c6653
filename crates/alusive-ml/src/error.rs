use crate::chat::{ChatError, EncoderError};
use crate::config::ConfigError;
use crate::documents::{DetectorError, ValidationError};
use crate::grants::{ApplicantBatchError, GrantError, ModelLoadError};
use crate::notify::NotifyError;
use crate::telemetry::TelemetryError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Json(serde_json::Error),
    ModelLoad(ModelLoadError),
    Encoder(EncoderError),
    Detector(DetectorError),
    Notify(NotifyError),
    Batch(ApplicantBatchError),
    Grant(GrantError),
    Chat(ChatError),
    Validation(ValidationError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Json(err) => write!(f, "invalid json: {}", err),
            AppError::ModelLoad(err) => write!(f, "grant model error: {}", err),
            AppError::Encoder(err) => write!(f, "embedding model error: {}", err),
            AppError::Detector(err) => write!(f, "document scorer error: {}", err),
            AppError::Notify(err) => write!(f, "mail error: {}", err),
            AppError::Batch(err) => write!(f, "batch import error: {}", err),
            AppError::Grant(err) => write!(f, "{}", err),
            AppError::Chat(err) => write!(f, "{}", err),
            AppError::Validation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::ModelLoad(err) => Some(err),
            AppError::Encoder(err) => Some(err),
            AppError::Detector(err) => Some(err),
            AppError::Notify(err) => Some(err),
            AppError::Batch(err) => Some(err),
            AppError::Grant(err) => Some(err),
            AppError::Chat(err) => Some(err),
            AppError::Validation(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Grant(err) if err.is_input_error() => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Validation(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Json(_) | AppError::Batch(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

/// Renders a rejected JSON body with the same `{"detail"}` shape as handler errors.
pub(crate) fn json_rejection_response(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    tracing::warn!(status = %status, error = %rejection.body_text(), "rejected request body");
    (status, Json(json!({ "detail": rejection.body_text() }))).into_response()
}

macro_rules! impl_from {
    ($($source:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$source> for AppError {
                fn from(value: $source) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from! {
    ConfigError => Config,
    TelemetryError => Telemetry,
    std::io::Error => Io,
    axum::Error => Server,
    serde_json::Error => Json,
    ModelLoadError => ModelLoad,
    EncoderError => Encoder,
    DetectorError => Detector,
    NotifyError => Notify,
    ApplicantBatchError => Batch,
    GrantError => Grant,
    ChatError => Chat,
    ValidationError => Validation,
}
