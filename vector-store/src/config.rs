//! Connection settings for Qdrant.

use crate::errors::VectorStoreError;

/// Default endpoint of a local Qdrant instance (gRPC port).
pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6334";

/// Connection settings, loaded once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QdrantSettings {
    /// Qdrant endpoint, e.g. `http://localhost:6334`.
    pub url: String,
    /// Optional API key for Qdrant Cloud.
    pub api_key: Option<String>,
    /// Optional per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for QdrantSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_QDRANT_URL.to_string(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl QdrantSettings {
    /// Reads `QDRANT_URL`, `QDRANT_API_KEY` and `QDRANT_TIMEOUT_SECS`.
    ///
    /// Unset or blank variables fall back to defaults.
    pub fn from_env() -> Result<Self, VectorStoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`QdrantSettings::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, VectorStoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs = match non_blank("QDRANT_TIMEOUT_SECS") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                VectorStoreError::Config(format!(
                    "QDRANT_TIMEOUT_SECS must be a positive integer, got '{raw}'"
                ))
            })?),
            None => None,
        };

        let settings = Self {
            url: non_blank("QDRANT_URL").unwrap_or_else(|| DEFAULT_QDRANT_URL.to_string()),
            api_key: non_blank("QDRANT_API_KEY"),
            timeout_secs,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Validates config values.
    pub fn validate(&self) -> Result<(), VectorStoreError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(VectorStoreError::Config("qdrant url is empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(VectorStoreError::Config(format!(
                "qdrant url must start with http:// or https://, got '{url}'"
            )));
        }
        if self.timeout_secs == Some(0) {
            return Err(VectorStoreError::Config("QDRANT_TIMEOUT_SECS must be > 0".into()));
        }
        Ok(())
    }
}
