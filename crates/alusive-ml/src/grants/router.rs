use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::{error, warn};

use crate::error::json_rejection_response;

use super::domain::ApplicantRecord;
use super::model::GrantClassifier;
use super::service::{GrantError, GrantPredictor};

/// Router exposing the grant prediction endpoint.
pub fn grant_router<M>(predictor: Arc<GrantPredictor<M>>) -> Router
where
    M: GrantClassifier + 'static,
{
    Router::new()
        .route("/predict-grant", post(predict_handler::<M>))
        .route("/predict-grant/", post(predict_handler::<M>))
        .with_state(predictor)
}

pub(crate) async fn predict_handler<M>(
    State(predictor): State<Arc<GrantPredictor<M>>>,
    payload: Result<Json<ApplicantRecord>, JsonRejection>,
) -> Response
where
    M: GrantClassifier + 'static,
{
    let Json(record) = match payload {
        Ok(record) => record,
        Err(rejection) => return json_rejection_response(rejection),
    };

    match predictor.predict(&record) {
        Ok(prediction) => (StatusCode::OK, Json(prediction)).into_response(),
        Err(err @ GrantError::Encoding(_)) => {
            warn!(error = %err, "rejected grant application");
            let payload = json!({ "detail": err.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(other) => {
            error!(error = %other, "grant prediction failed");
            let payload = json!({ "detail": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
