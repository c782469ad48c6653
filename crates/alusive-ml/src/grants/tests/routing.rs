use super::common::*;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::grants::domain::EncodingPolicy;
use crate::grants::router::grant_router;
use crate::grants::service::GrantPredictor;

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn predict_route_returns_prediction() {
    let router = grant_router(Arc::new(fixture_predictor()));
    let payload = serde_json::to_value(scenario_record()).expect("serializes");

    let response = router
        .oneshot(post_json("/predict-grant/", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["predicted_category"], json!(2));
    assert_eq!(body["probabilities"].as_array().map(Vec::len), Some(3));
    assert!(body["grant_message"]
        .as_str()
        .expect("message string")
        .contains("$1000"));
}

#[tokio::test]
async fn predict_route_accepts_path_without_trailing_slash() {
    let router = grant_router(Arc::new(fixture_predictor()));
    let payload = serde_json::to_value(scenario_record()).expect("serializes");

    let response = router
        .oneshot(post_json("/predict-grant", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_category_returns_unprocessable() {
    let router = grant_router(Arc::new(fixture_predictor()));
    let mut payload = serde_json::to_value(scenario_record()).expect("serializes");
    payload["academic_standing"] = json!("Sometimes");

    let response = router
        .oneshot(post_json("/predict-grant/", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["detail"]
        .as_str()
        .expect("detail string")
        .contains("Sometimes"));
}

#[tokio::test]
async fn missing_field_is_rejected_before_the_pipeline() {
    let router = grant_router(Arc::new(fixture_predictor()));
    let mut payload = serde_json::to_value(scenario_record()).expect("serializes");
    payload
        .as_object_mut()
        .expect("object payload")
        .remove("household_size");

    let response = router
        .oneshot(post_json("/predict-grant/", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["detail"]
        .as_str()
        .expect("detail string")
        .contains("household_size"));
}

#[tokio::test]
async fn malformed_json_returns_detail_body() {
    let router = grant_router(Arc::new(fixture_predictor()));
    let request = Request::post("/predict-grant/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"academic_standing\": "))
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn model_failure_returns_internal_error() {
    let predictor = GrantPredictor::new(Arc::new(BrokenClassifier), EncodingPolicy::default())
        .expect("stub matches schema");
    let router = grant_router(Arc::new(predictor));
    let payload = serde_json::to_value(scenario_record()).expect("serializes");

    let response = router
        .oneshot(post_json("/predict-grant/", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["detail"].is_string());
}
