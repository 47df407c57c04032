use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::analysis::AnalysisError;
use super::domain::{AssessmentId, StudentId};
use super::repository::AssessmentRepository;
use super::service::{AnalysisService, AnalysisServiceError};

/// Router builder exposing the analysis endpoints consumed by report and
/// recommendation collaborators.
pub fn diagnostics_router<R>(service: Arc<AnalysisService<R>>) -> Router
where
    R: AssessmentRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessments/:assessment_id/analysis",
            get(analyze_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/recommendations",
            get(recommendations_handler::<R>),
        )
        .route(
            "/api/v1/students/:student_id/analysis/history",
            get(history_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationParams {
    #[serde(default)]
    pub(crate) count: Option<usize>,
}

pub(crate) async fn analyze_handler<R>(
    State(service): State<Arc<AnalysisService<R>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.analyze(&id) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommendations_handler<R>(
    State(service): State<Arc<AnalysisService<R>>>,
    Path(assessment_id): Path<String>,
    Query(params): Query<RecommendationParams>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.recommend(&id, params.count) {
        Ok(recommendations) => (StatusCode::OK, axum::Json(recommendations)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<AnalysisService<R>>>,
    Path(student_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
{
    let id = StudentId(student_id);
    match service.history(&id) {
        Ok(history) => (StatusCode::OK, axum::Json(history)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AnalysisServiceError) -> Response {
    let (status, payload) = match &error {
        AnalysisServiceError::Analysis(AnalysisError::NotFound(_))
        | AnalysisServiceError::StudentNotFound(_) => {
            (StatusCode::NOT_FOUND, json!({ "error": error.to_string() }))
        }
        AnalysisServiceError::Analysis(AnalysisError::NotCompleted { status, .. }) => (
            StatusCode::BAD_REQUEST,
            json!({ "error": error.to_string(), "status": status.label() }),
        ),
        AnalysisServiceError::Analysis(AnalysisError::NoResponses(_)) => {
            (StatusCode::BAD_REQUEST, json!({ "error": error.to_string() }))
        }
        AnalysisServiceError::Repository(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": error.to_string() }),
        ),
    };

    (status, axum::Json(payload)).into_response()
}
