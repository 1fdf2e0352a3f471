//! POST /collections: create (or recreate) a collection.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use tracing::{info, instrument};
use vector_store::{CollectionSpec, Distance};

use crate::{
    core::{app_state::AppState, http::message_response::MessageResponse},
    error_handler::AppResult,
    middleware_layer::json_extractor::ValidatedJson,
    routes::collections::create_collection_request::CreateCollectionRequest,
};

/// Drops any collection with the same name and creates it with the requested
/// size and metric. Existing points are lost.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/collections \
///   -H 'content-type: application/json' \
///   -d '{"name":"docs","vector_size":384,"distance":"dot"}'
/// ```
#[instrument(name = "create_collection_route", skip(state, body), fields(collection = %body.name))]
pub async fn create_collection_route(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<CreateCollectionRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    // Unknown labels fail here, before any call to Qdrant.
    let distance: Distance = body.distance.parse()?;

    let spec = CollectionSpec {
        name: body.name,
        vector_size: body.vector_size,
        distance,
    };

    {
        let _guard = state.locks.write(&spec.name).await;
        state.vector_store.recreate_collection(&spec).await?;
    }

    info!(size = spec.vector_size, %distance, "collection ready");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!("Collection '{}' ready.", spec.name))),
    ))
}
