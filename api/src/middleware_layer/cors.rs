use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::core::api_config::ApiConfig;

/// CORS for the configured browser origins.
///
/// Credentials are allowed, so methods and headers are mirrored from the
/// preflight request instead of using a `*` wildcard.
pub fn cors_layer(cfg: &ApiConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(cfg.cors_origins.clone()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
