pub mod ingest_notes_request;
pub mod ingest_notes_route;
pub mod semantic_search_request;
pub mod semantic_search_response;
pub mod semantic_search_route;

/// Collection used when a semantic request does not name one.
pub const DEFAULT_NOTES_COLLECTION: &str = "notes";

fn default_collection() -> String {
    DEFAULT_NOTES_COLLECTION.to_string()
}
