use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::archive::SessionArchive;
use super::flow::{AdvanceError, SessionId};
use super::service::{AnswerRequest, SessionService, SessionServiceError};

/// Router builder exposing the assessment session endpoints.
pub fn session_router<A>(service: Arc<SessionService<A>>) -> Router
where
    A: SessionArchive + 'static,
{
    Router::new()
        .route("/api/v1/sessions", post(create_handler::<A>))
        .route("/api/v1/sessions/:session_id", get(view_handler::<A>))
        .route(
            "/api/v1/sessions/:session_id/answers",
            post(answer_handler::<A>),
        )
        .route(
            "/api/v1/sessions/:session_id/advance",
            post(advance_handler::<A>),
        )
        .route(
            "/api/v1/sessions/:session_id/reset",
            post(reset_handler::<A>),
        )
        .route(
            "/api/v1/sessions/:session_id/report",
            get(report_handler::<A>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CreateSessionRequest {
    pub session_id: Option<String>,
}

fn error_payload(error: &dyn std::fmt::Display) -> serde_json::Value {
    json!({ "error": error.to_string() })
}

pub(crate) async fn create_handler<A>(
    State(service): State<Arc<SessionService<A>>>,
    body: Option<axum::Json<CreateSessionRequest>>,
) -> Response
where
    A: SessionArchive + 'static,
{
    let request = body.map(|axum::Json(request)| request).unwrap_or_default();
    match service.start(request.session_id) {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(error @ SessionServiceError::AlreadyExists(_)) => {
            (StatusCode::CONFLICT, axum::Json(error_payload(&error))).into_response()
        }
        Err(error @ SessionServiceError::CapacityExhausted) => (
            StatusCode::SERVICE_UNAVAILABLE,
            axum::Json(error_payload(&error)),
        )
            .into_response(),
        Err(other) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(error_payload(&other)),
        )
            .into_response(),
    }
}

pub(crate) async fn view_handler<A>(
    State(service): State<Arc<SessionService<A>>>,
    Path(session_id): Path<String>,
) -> Response
where
    A: SessionArchive + 'static,
{
    let id = SessionId(session_id);
    match service.view(&id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error @ SessionServiceError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, axum::Json(error_payload(&error))).into_response()
        }
        Err(other) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(error_payload(&other)),
        )
            .into_response(),
    }
}

pub(crate) async fn answer_handler<A>(
    State(service): State<Arc<SessionService<A>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<AnswerRequest>,
) -> Response
where
    A: SessionArchive + 'static,
{
    let id = SessionId(session_id);
    match service.answer(&id, request) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error @ SessionServiceError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, axum::Json(error_payload(&error))).into_response()
        }
        Err(error @ SessionServiceError::Answer(_)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(error_payload(&error)),
        )
            .into_response(),
        Err(other) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(error_payload(&other)),
        )
            .into_response(),
    }
}

pub(crate) async fn advance_handler<A>(
    State(service): State<Arc<SessionService<A>>>,
    Path(session_id): Path<String>,
) -> Response
where
    A: SessionArchive + 'static,
{
    let id = SessionId(session_id);
    match service.advance(&id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error @ SessionServiceError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, axum::Json(error_payload(&error))).into_response()
        }
        Err(SessionServiceError::Advance(AdvanceError::InventoryIncomplete { unanswered })) => {
            let payload = json!({
                "error": "the risk-taking inventory is incomplete",
                "unanswered": unanswered,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(error @ SessionServiceError::Advance(_)) => {
            (StatusCode::CONFLICT, axum::Json(error_payload(&error))).into_response()
        }
        Err(other) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(error_payload(&other)),
        )
            .into_response(),
    }
}

pub(crate) async fn reset_handler<A>(
    State(service): State<Arc<SessionService<A>>>,
    Path(session_id): Path<String>,
) -> Response
where
    A: SessionArchive + 'static,
{
    let id = SessionId(session_id);
    match service.reset(&id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(error @ SessionServiceError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, axum::Json(error_payload(&error))).into_response()
        }
        Err(other) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(error_payload(&other)),
        )
            .into_response(),
    }
}

pub(crate) async fn report_handler<A>(
    State(service): State<Arc<SessionService<A>>>,
    Path(session_id): Path<String>,
) -> Response
where
    A: SessionArchive + 'static,
{
    let id = SessionId(session_id);
    match service.report(&id) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error @ SessionServiceError::NotFound(_)) => {
            (StatusCode::NOT_FOUND, axum::Json(error_payload(&error))).into_response()
        }
        Err(error @ SessionServiceError::ReportUnavailable) => {
            (StatusCode::CONFLICT, axum::Json(error_payload(&error))).into_response()
        }
        Err(other) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(error_payload(&other)),
        )
            .into_response(),
    }
}
