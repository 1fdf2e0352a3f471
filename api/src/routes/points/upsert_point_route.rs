//! POST /points: insert or update one vector.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use tracing::debug;
use vector_store::PointRecord;

use crate::{
    core::{app_state::AppState, http::message_response::MessageResponse},
    error_handler::AppResult,
    middleware_layer::json_extractor::ValidatedJson,
    routes::points::upsert_point_request::UpsertPointRequest,
};

/// Collection existence and vector length are left to Qdrant to enforce.
pub async fn upsert_point_route(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<UpsertPointRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    debug!(
        collection = %body.collection_name,
        point_id = %body.point_id,
        dim = body.vector.len(),
        "upsert_point_route: start"
    );

    let message = format!("Point '{}' queued for upsert.", body.point_id);
    let record = PointRecord {
        id: body.point_id,
        vector: body.vector,
        payload: body.payload.unwrap_or_default(),
    };

    {
        let _guard = state.locks.read(&body.collection_name).await;
        state
            .vector_store
            .upsert_points(&body.collection_name, vec![record])
            .await?;
    }

    Ok((StatusCode::ACCEPTED, Json(MessageResponse::new(message))))
}
