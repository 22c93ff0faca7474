//! Integration tests for the HTTP API
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use surplus_backend::config::UnseenCategoryPolicy;
use surplus_backend::{create_app, YieldPredictor};
use tower::ServiceExt;

use common::*;

fn fallback_app() -> Router {
    create_app(app_state(YieldPredictor::fallback_only()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_plain_health_check() {
    let response = fallback_app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"OK");
}

#[tokio::test]
async fn test_api_health_reports_method() {
    let (status, body) = send(fallback_app(), get("/api/v1/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["prediction_method"], "FALLBACK");
    assert_eq!(body["model_loaded"], false);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, body) = send(fallback_app(), get("/api/v1/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// ============================================================================
// Predictions
// ============================================================================

#[tokio::test]
async fn test_predict_without_model() {
    let request = post_json(
        "/api/v1/predictions",
        json!({"crop_name": "onion", "area": 5.0, "irrigation_type": "sprinkler"}),
    );
    let (status, body) = send(fallback_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["yield_tons"], 24.75);
    assert_eq!(body["method"], "FALLBACK");
}

#[tokio::test]
async fn test_predict_with_model() {
    let dir = artifact_dir();
    let app = create_app(app_state(model_predictor(&dir, UnseenCategoryPolicy::Reject)));

    let request = post_json("/api/v1/predictions", json!({"crop_name": "tomato", "area": 5.0}));
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["yield_tons"], 35.0);
    assert_eq!(body["method"], "MODEL");
}

#[tokio::test]
async fn test_predict_rejects_unseen_crop() {
    let dir = artifact_dir();
    let app = create_app(app_state(model_predictor(&dir, UnseenCategoryPolicy::Reject)));

    let request = post_json("/api/v1/predictions", json!({"crop_name": "durian", "area": 1.0}));
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "UNSEEN_CATEGORY");
    assert_eq!(body["error"]["field"], "crop_name");
}

#[tokio::test]
async fn test_predict_rejects_non_positive_area() {
    for area in [0.0, -3.0] {
        let request = post_json(
            "/api/v1/predictions",
            json!({"crop_name": "tomato", "area": area}),
        );
        let (status, body) = send(fallback_app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "area");
    }
}

#[tokio::test]
async fn test_predict_rejects_oversized_area() {
    let request = post_json(
        "/api/v1/predictions",
        json!({"crop_name": "tomato", "area": 1e307, "irrigation_type": "drip"}),
    );
    let (status, body) = send(fallback_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "area");
}

#[tokio::test]
async fn test_malformed_body_is_validation_error() {
    let bodies = [
        json!({"crop_name": "tomato"}),
        json!({"crop_name": "tomato", "area": "two"}),
    ];
    for body in bodies {
        let request = post_json("/api/v1/predictions", body);
        let (status, body) = send(fallback_app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "body");
        assert!(body["error"]["message"].is_string());
    }
}

#[tokio::test]
async fn test_syntax_error_is_validation_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/impact")
        .header("content-type", "application/json")
        .body(Body::from("{\"total_surplus_tons\": "))
        .unwrap();
    let (status, body) = send(fallback_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_fallback_endpoint_ignores_model() {
    let dir = artifact_dir();
    let app = create_app(app_state(model_predictor(&dir, UnseenCategoryPolicy::Reject)));

    let request = post_json(
        "/api/v1/predictions/fallback",
        json!({"crop_name": "tomato", "area": 2.0, "irrigation_type": "drip"}),
    );
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["yield_tons"], 13.2);
    assert_eq!(body["method"], "FALLBACK");
}

#[tokio::test]
async fn test_confidence_endpoint() {
    let (status, body) = send(fallback_app(), get("/api/v1/predictions/confidence")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["level"], "MEDIUM");
    assert_eq!(body["method"], "Rule-based Estimation");

    let dir = artifact_dir();
    let app = create_app(app_state(model_predictor(&dir, UnseenCategoryPolicy::Reject)));
    let (_, body) = send(app, get("/api/v1/predictions/confidence")).await;
    assert_eq!(body["level"], "HIGH");
}

// ============================================================================
// Assessments and Impact
// ============================================================================

#[tokio::test]
async fn test_assessment_raises_alert() {
    let request = post_json(
        "/api/v1/assessments",
        json!({
            "crop_name": "tomato",
            "area": 2.0,
            "planting_date": "2024-06-01",
            "irrigation_type": "drip",
            "expected_consumption": 1.2
        }),
    );
    let (status, body) = send(fallback_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["predicted_yield_tons"], 13.2);
    assert_eq!(body["predicted_surplus_tons"], 12.0);
    assert_eq!(body["surplus_level"], "HIGH");
    assert_eq!(body["status"], "planned");
    assert_eq!(body["expected_harvest_date"], "2024-08-15");
    assert_eq!(body["alert"]["title"], "High Surplus Alert!");
    assert_eq!(body["alert"]["kind"], "warning");
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 4);
    assert_eq!(body["confidence"]["level"], "MEDIUM");
}

#[tokio::test]
async fn test_assessment_without_surplus() {
    let request = post_json(
        "/api/v1/assessments",
        json!({
            "crop_name": "chili",
            "area": 1.0,
            "planting_date": "2024-01-10",
            "expected_consumption": 5.0
        }),
    );
    let (status, body) = send(fallback_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["predicted_surplus_tons"], 0.0);
    assert_eq!(body["surplus_level"], "LOW");
    assert!(body.get("alert").is_none());
}

#[tokio::test]
async fn test_assessment_rejects_bad_humidity() {
    let request = post_json(
        "/api/v1/assessments",
        json!({
            "crop_name": "rice",
            "area": 1.0,
            "planting_date": "2024-01-10",
            "humidity_pct": 140.0
        }),
    );
    let (status, body) = send(fallback_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "humidity_pct");
}

#[tokio::test]
async fn test_assessment_status() {
    let assess = |status: &str| {
        post_json(
            "/api/v1/assessments",
            json!({
                "crop_name": "onion",
                "area": 1.0,
                "planting_date": "2024-03-01",
                "status": status
            }),
        )
    };

    let (status, body) = send(fallback_app(), assess("growing")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "growing");

    let (status, body) = send(fallback_app(), assess("rotten")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "status");
}

#[tokio::test]
async fn test_impact_summary() {
    let request = post_json("/api/v1/impact", json!({"total_surplus_tons": 10.0}));
    let (status, body) = send(fallback_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["food_saved_tons"], 7.5);
    assert_eq!(body["co2_prevented_tons"], 18.75);
    assert_eq!(body["compost_generated_tons"], 1.5);
    assert_eq!(body["extra_income_inr"], 52500.0);
}

#[tokio::test]
async fn test_impact_rejects_negative_total() {
    let request = post_json("/api/v1/impact", json!({"total_surplus_tons": -2.0}));
    let (status, body) = send(fallback_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "total_surplus_tons");
}
