use axum::http::HeaderValue;

use crate::error_handler::AppError;

/// Default bind address when `API_ADDRESS` is unset.
pub const DEFAULT_API_ADDRESS: &str = "0.0.0.0:8000";

/// Frontend dev servers allowed to call the API from a browser.
pub const DEV_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// HTTP server settings.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Socket address to bind, e.g. `0.0.0.0:8000`.
    pub address: String,
    pub cors_origins: Vec<HeaderValue>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_API_ADDRESS.to_string(),
            cors_origins: DEV_CORS_ORIGINS
                .iter()
                .map(|o| HeaderValue::from_static(o))
                .collect(),
        }
    }
}

impl ApiConfig {
    /// Load server settings from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let mut cfg = Self::default();
        if let Ok(address) = std::env::var("API_ADDRESS") {
            let address = address.trim();
            if address.is_empty() {
                return Err(AppError::Config("API_ADDRESS is set but empty".into()));
            }
            cfg.address = address.to_string();
        }
        Ok(cfg)
    }
}
