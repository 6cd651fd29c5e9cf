use super::common::*;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::scoring::router::{predict_handler, score_handler};
use crate::scoring::FitRequest;

fn json_request(uri: &str, body: Value) -> Request<axum::body::Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serializable body"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn predict_handler_returns_rounded_score() {
    let response = predict_handler(State(Arc::new(service())), axum::Json(request())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let score = payload
        .get("fit_score")
        .and_then(Value::as_f64)
        .expect("score present");
    assert!((80.0..=95.0).contains(&score));
}

#[tokio::test]
async fn predict_handler_rejects_missing_fields() {
    let request = FitRequest {
        experience: Some(2.0),
        ..FitRequest::default()
    };

    let response = predict_handler(State(Arc::new(service())), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("error"), Some(&json!("Missing data")));
    assert_eq!(
        payload.get("missing"),
        Some(&json!(["skill_match", "education", "cgpa", "projects"]))
    );
}

#[tokio::test]
async fn score_handler_returns_unprocessable_for_invalid_projects() {
    let mut request = request();
    request.projects = Some(1.5);

    let response = score_handler(State(Arc::new(service())), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn predict_route_accepts_the_legacy_payload() {
    let response = router()
        .oneshot(json_request(
            "/predict",
            json!({
                "experience": 0,
                "skill_match": 10,
                "education": 2,
                "cgpa": 3,
                "projects": 0
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let score = payload
        .get("fit_score")
        .and_then(Value::as_f64)
        .expect("score present");
    assert!((score - 13.0).abs() < 0.011);
    assert_eq!(payload.get("outcome"), Some(&json!("scored")));
}

#[tokio::test]
async fn predict_route_flags_the_fallback_score() {
    let response = router()
        .oneshot(json_request(
            "/predict",
            json!({
                "experience": 40,
                "skill_match": -50,
                "education": -10,
                "cgpa": -20,
                "projects": 0
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("fit_score"), Some(&json!(0.0)));
    assert_eq!(payload.get("outcome"), Some(&json!("no_rule_fired")));
}

#[tokio::test]
async fn score_route_returns_audit_trail() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/fit/score",
            json!({
                "experience": 8,
                "education": 4,
                "cgpa": 8,
                "projects": 3,
                "candidateSkills": "rust, tokio, axum, serde, sql, docker, k8s, grpc, kafka",
                "requiredSkills": "rust, tokio, axum, serde, sql, docker, k8s, grpc, kafka, redis"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("outcome"), Some(&json!("scored")));
    assert_eq!(
        payload.pointer("/inputs/skill_match").and_then(Value::as_f64),
        Some(90.0)
    );
    assert_eq!(
        payload.get("dominant_label").and_then(Value::as_str),
        Some("Top Candidate")
    );
    let rules = payload
        .get("rules")
        .and_then(Value::as_array)
        .expect("rules listed");
    assert_eq!(rules.len(), 8);
    assert_eq!(
        rules[0].get("antecedent").and_then(Value::as_str),
        Some("(skill_match=High AND experience=Matched)")
    );
    assert!(payload.get("evaluated_at").is_some());
}

#[tokio::test]
async fn score_route_flags_when_no_rule_fired() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/fit/score",
            serde_json::to_value(out_of_range_request()).expect("serializable request"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("outcome"), Some(&json!("no_rule_fired")));
    assert_eq!(payload.get("fit_score"), Some(&json!(0.0)));
    assert!(payload.get("dominant_label").is_none());
}
