use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::error;

use crate::error::json_rejection_response;

use super::encoder::SentenceEncoder;
use super::matcher::{ChatRequest, FaqMatcher};

/// Router exposing the FAQ chat endpoint.
pub fn chat_router<E>(matcher: Arc<FaqMatcher<E>>) -> Router
where
    E: SentenceEncoder + 'static,
{
    Router::new()
        .route("/chat", post(chat_handler::<E>))
        .route("/chat/", post(chat_handler::<E>))
        .with_state(matcher)
}

pub(crate) async fn chat_handler<E>(
    State(matcher): State<Arc<FaqMatcher<E>>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response
where
    E: SentenceEncoder + 'static,
{
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => return json_rejection_response(rejection),
    };

    // Encoding is CPU-bound when backed by the ONNX session.
    let outcome =
        tokio::task::spawn_blocking(move || matcher.answer(&request.question)).await;

    match outcome {
        Ok(Ok(answer)) => (StatusCode::OK, Json(answer)).into_response(),
        Ok(Err(err)) => {
            error!(error = %err, "chat answer failed");
            let payload = json!({ "detail": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
        Err(join_err) => {
            error!(error = %join_err, "chat worker panicked");
            let payload = json!({ "detail": "chat worker failed" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
