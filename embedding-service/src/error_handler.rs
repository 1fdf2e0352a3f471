//! Errors raised while configuring or calling the embeddings backend.
//!
//! Every message starts with `[Embedding Service]` so it stands out in the
//! gateway's logs and in `EMBEDDING_ERROR` response bodies.

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EmbeddingError>;

/// Maximum number of characters kept from an upstream error body.
const SNIPPET_MAX_CHARS: usize = 300;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Bad or missing settings, caught before the first request.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transport failure before any status line arrived.
    #[error("[Embedding Service] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("[Embedding Service] HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        status: StatusCode,
        url: String,
        /// Whitespace-collapsed head of the response body.
        snippet: String,
    },

    /// 2xx body that is not a usable embeddings response.
    #[error("[Embedding Service] decode error: {0}")]
    Decode(String),
}

/// Problems found while reading [`crate::EmbeddingConfig`] from the environment.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Variable unset or blank.
    #[error("[Embedding Service] missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("[Embedding Service] invalid number in {var}: {reason}")]
    InvalidNumber {
        var: &'static str,
        reason: &'static str,
    },

    /// e.g. a base URL without a scheme.
    #[error("[Embedding Service] invalid format in {var}: {reason}")]
    InvalidFormat {
        var: &'static str,
        reason: &'static str,
    },
}

/// Only plain `http://` and `https://` endpoints are accepted.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Collapses whitespace and truncates an upstream body for error messages.
pub fn make_snippet(body: &str) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= SNIPPET_MAX_CHARS {
        return collapsed;
    }
    let mut out: String = collapsed.chars().take(SNIPPET_MAX_CHARS).collect();
    out.push('…');
    out
}
