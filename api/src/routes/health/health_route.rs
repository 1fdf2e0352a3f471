//! GET /health: readiness probe against Qdrant.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::warn;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::health::health_response::HealthResponse,
};

/// Lists collections as a cheap connectivity check.
///
/// Any failure is reported as 503 with the underlying message.
pub async fn health_route(State(state): State<Arc<AppState>>) -> AppResult<Json<HealthResponse>> {
    if let Err(err) = state.vector_store.list_collections().await {
        warn!(error = %err, "health probe failed");
        return Err(AppError::ServiceUnavailable(format!(
            "Unable to reach Qdrant: {err}"
        )));
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
