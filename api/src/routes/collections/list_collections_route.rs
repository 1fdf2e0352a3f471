//! GET /collections: names of all collections.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    core::app_state::AppState, error_handler::AppResult,
    routes::collections::collections_response::CollectionsResponse,
};

pub async fn list_collections_route(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<CollectionsResponse>> {
    let mut collections = state.vector_store.list_collections().await?;
    collections.sort();
    Ok(Json(CollectionsResponse { collections }))
}
