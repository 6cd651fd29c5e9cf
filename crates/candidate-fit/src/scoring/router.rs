use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::{FitRequest, RequestError};
use super::service::{FitScoringService, ScoringServiceError};

/// Router builder exposing the scoring endpoints.
pub fn fit_router(service: Arc<FitScoringService>) -> Router {
    Router::new()
        .route("/predict", post(predict_handler))
        .route("/api/v1/fit/score", post(score_handler))
        .with_state(service)
}

pub(crate) async fn predict_handler(
    State(service): State<Arc<FitScoringService>>,
    axum::Json(request): axum::Json<FitRequest>,
) -> Response {
    match service.predict(&request) {
        Ok((score, outcome)) => {
            let payload = json!({ "fit_score": score, "outcome": outcome });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler(
    State(service): State<Arc<FitScoringService>>,
    axum::Json(request): axum::Json<FitRequest>,
) -> Response {
    match service.score(&request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ScoringServiceError) -> Response {
    match error {
        ScoringServiceError::Request(RequestError::MissingData { fields }) => {
            let payload = json!({
                "error": "Missing data",
                "missing": fields,
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        ScoringServiceError::Request(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        ScoringServiceError::Engine(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
