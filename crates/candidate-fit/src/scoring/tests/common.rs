use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::fuzzy::{InferenceEngine, DEFAULT_RESOLUTION};
use crate::scoring::{fit_router, FitRequest, FitScoringService};

pub(super) fn service() -> FitScoringService {
    let engine = InferenceEngine::standard(DEFAULT_RESOLUTION).expect("standard engine builds");
    FitScoringService::new(Arc::new(engine))
}

pub(super) fn request() -> FitRequest {
    FitRequest {
        experience: Some(8.0),
        skill_match: Some(90.0),
        education: Some(4.0),
        cgpa: Some(8.0),
        projects: Some(3.0),
        candidate_skills: None,
        required_skills: None,
    }
}

pub(super) fn newcomer_request() -> FitRequest {
    FitRequest {
        experience: Some(0.0),
        skill_match: Some(10.0),
        education: Some(2.0),
        cgpa: Some(3.0),
        projects: Some(0.0),
        ..FitRequest::default()
    }
}

pub(super) fn out_of_range_request() -> FitRequest {
    FitRequest {
        experience: Some(20.0),
        skill_match: Some(-10.0),
        education: Some(3.0),
        cgpa: Some(-20.0),
        projects: Some(0.0),
        ..FitRequest::default()
    }
}

pub(super) fn router() -> axum::Router {
    fit_router(Arc::new(service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
