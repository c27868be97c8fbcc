use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::repositories::TtsRepository;

fn availability(present: bool) -> &'static str {
    if present {
        "available"
    } else {
        "missing"
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(tts_repo): State<Arc<dyn TtsRepository>>) -> impl IntoResponse {
    let readiness = tts_repo.readiness().await;

    let (status, label) = if readiness.is_ready() {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };

    (
        status,
        Json(json!({
            "status": label,
            "engine": availability(readiness.engine),
            "models": availability(readiness.models)
        })),
    )
}
