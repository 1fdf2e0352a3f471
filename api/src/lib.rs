pub mod core;
pub mod error_handler;
pub mod middleware_layer;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::core::{api_config::ApiConfig, app_state::AppState};
use crate::error_handler::AppError;
use crate::middleware_layer::cors::cors_layer;

/// Full application: routes, shared state, CORS and request tracing.
pub fn app(state: AppState, cfg: &ApiConfig) -> Router {
    routes::routes()
        .with_state(Arc::new(state))
        .layer(cors_layer(cfg))
        .layer(TraceLayer::new_for_http())
}

/// Composition root: build clients from the environment and serve until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let cfg = ApiConfig::from_env()?;
    let state = AppState::from_env()?;
    info!(
        model = %state.embeddings.model(),
        "clients initialized"
    );

    let app = app(state, &cfg);

    let listener = tokio::net::TcpListener::bind(&cfg.address)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %cfg.address, "listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
