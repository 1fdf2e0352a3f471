//! Embedding provider configuration loaded from environment variables.
//!
//! # Environment variables
//! - `OPENAI_API_KEY`         = provider credential (mandatory)
//! - `OPENAI_BASE_URL`        = API base, default `https://api.openai.com`
//! - `EMBEDDING_TIMEOUT_SECS` = optional request timeout, default 60

use crate::error_handler::{ConfigError, Result, validate_http_endpoint};

/// The one embedding model used for the whole process lifetime.
pub const EMBEDDING_MODEL: &str = "text-embedding-3-small";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for the embeddings client.
#[derive(Clone)]
pub struct EmbeddingConfig {
    /// Bearer credential for the provider.
    pub api_key: String,
    /// API base URL without the `/v1/...` suffix.
    pub endpoint: String,
    /// Model identifier sent with each request.
    pub model: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for EmbeddingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl EmbeddingConfig {
    /// Config for the fixed model against an explicit endpoint.
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: EMBEDDING_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Loads the config strictly from the process environment.
    ///
    /// # Errors
    /// - [`ConfigError::MissingVar`] if `OPENAI_API_KEY` is absent or blank
    /// - [`ConfigError::InvalidFormat`] if `OPENAI_BASE_URL` is not http(s)
    /// - [`ConfigError::InvalidNumber`] if `EMBEDDING_TIMEOUT_SECS` is not a positive integer
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EmbeddingConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_blank("OPENAI_API_KEY").ok_or(ConfigError::MissingVar("OPENAI_API_KEY"))?;

        let endpoint = non_blank("OPENAI_BASE_URL")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
        validate_http_endpoint("OPENAI_BASE_URL", &endpoint)?;

        let timeout_secs = match non_blank("EMBEDDING_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        var: "EMBEDDING_TIMEOUT_SECS",
                        reason: "expected a positive integer",
                    }
                    .into());
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            endpoint,
            model: EMBEDDING_MODEL.to_string(),
            timeout_secs,
        })
    }
}
