use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use risk_profile::assessments::catalog::{instructions, inventory, investor, literacy};
use risk_profile::assessments::session::{session_router, SessionArchive, SessionService};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_session_routes<A>(service: Arc<SessionService<A>>) -> axum::Router
where
    A: SessionArchive + 'static,
{
    session_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/catalog", axum::routing::get(catalog_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Serves the full instrument catalog so clients can render every screen
/// without hardcoding question text.
pub(crate) async fn catalog_endpoint() -> Json<serde_json::Value> {
    let anchors: Vec<serde_json::Value> = (inventory::SCALE_MIN..=inventory::SCALE_MAX)
        .map(|value| {
            json!({
                "value": value,
                "label": inventory::anchor(value),
            })
        })
        .collect();

    Json(json!({
        "notices": instructions::notices(),
        "investor": investor::questions(),
        "literacy": literacy::questions(),
        "inventory": {
            "instruction": inventory::RESPONSE_INSTRUCTION,
            "items": inventory::items(),
            "anchors": anchors,
        },
    }))
}
