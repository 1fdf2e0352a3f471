pub mod api_config;
pub mod app_state;
pub mod collection_locks;
pub mod http;
