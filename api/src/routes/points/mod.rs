pub mod upsert_point_request;
pub mod upsert_point_route;
