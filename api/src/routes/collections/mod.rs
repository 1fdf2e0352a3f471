pub mod collections_response;
pub mod create_collection_request;
pub mod create_collection_route;
pub mod list_collections_route;
