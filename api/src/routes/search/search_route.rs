//! POST /search: vector similarity search.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::debug;
use vector_store::SearchQuery;

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    middleware_layer::json_extractor::ValidatedJson,
    routes::search::{search_request::SearchRequest, search_response::SearchResult},
};

pub async fn search_route(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<SearchRequest>,
) -> AppResult<Json<Vec<SearchResult>>> {
    let collection = body.collection_name;
    let hits = {
        let _guard = state.locks.read(&collection).await;
        state
            .vector_store
            .search(SearchQuery {
                collection: collection.clone(),
                vector: body.vector,
                limit: body.limit,
                with_payload: body.with_payload,
            })
            .await?
    };

    debug!(%collection, hits = hits.len(), "search_route: success");
    Ok(Json(hits.into_iter().map(SearchResult::from).collect()))
}
