//! POST /semantic/search: embed the query text and search the notes collection.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::debug;
use vector_store::SearchQuery;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    middleware_layer::json_extractor::ValidatedJson,
    routes::semantic::{
        semantic_search_request::SemanticSearchRequest,
        semantic_search_response::SemanticSearchHit,
    },
};

pub async fn semantic_search_route(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<SemanticSearchRequest>,
) -> AppResult<Json<Vec<SemanticSearchHit>>> {
    let query_vector = state
        .embeddings
        .embed_text_batch(std::slice::from_ref(&body.query))
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Internal("embedding provider returned no vector".into()))?;

    let collection = body.collection_name;
    let hits = {
        let _guard = state.locks.read(&collection).await;
        state
            .vector_store
            .search(SearchQuery {
                collection: collection.clone(),
                vector: query_vector,
                limit: body.limit,
                with_payload: true,
            })
            .await?
    };

    debug!(%collection, hits = hits.len(), "semantic_search_route: success");
    Ok(Json(hits.into_iter().map(SemanticSearchHit::from).collect()))
}
