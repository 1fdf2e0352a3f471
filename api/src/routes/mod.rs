pub mod collections;
pub mod health;
pub mod points;
pub mod search;
pub mod semantic;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::app_state::AppState;
use collections::{
    create_collection_route::create_collection_route,
    list_collections_route::list_collections_route,
};
use health::health_route::health_route;
use points::upsert_point_route::upsert_point_route;
use search::search_route::search_route;
use semantic::{
    ingest_notes_route::ingest_notes_route, semantic_search_route::semantic_search_route,
};

/// All endpoints, without middleware.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_route))
        .route(
            "/collections",
            get(list_collections_route).post(create_collection_route),
        )
        .route("/points", post(upsert_point_route))
        .route("/search", post(search_route))
        .route("/semantic/ingest", post(ingest_notes_route))
        .route("/semantic/search", post(semantic_search_route))
}
