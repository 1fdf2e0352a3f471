//! OpenAI embeddings client.
//!
//! Minimal, non-streaming client around `POST {endpoint}/v1/embeddings`.
//! One request embeds the whole batch; the response items are re-ordered by
//! their `index` so output position `i` always matches input position `i`.
//!
//! Errors are normalized via unified error types in `error_handler`.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::embedding_config::EmbeddingConfig,
    error_handler::{ConfigError, EmbeddingError, Result, make_snippet, validate_http_endpoint},
    provider::EmbeddingProvider,
};

/// Thin client for the OpenAI embeddings API.
///
/// Internally keeps a preconfigured `reqwest::Client` (timeout and default
/// headers), so one instance is meant to be shared for the process lifetime.
#[derive(Debug)]
pub struct OpenAiService {
    client: reqwest::Client,
    cfg: EmbeddingConfig,
    url_embeddings: String,
}

impl OpenAiService {
    /// Creates a new [`OpenAiService`] from the given config.
    ///
    /// # Errors
    /// - [`ConfigError::MissingVar`] if the API key is blank
    /// - [`ConfigError::InvalidFormat`] if the endpoint is not http(s)
    /// - [`EmbeddingError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: EmbeddingConfig) -> Result<Self> {
        if cfg.api_key.trim().is_empty() {
            return Err(ConfigError::MissingVar("OPENAI_API_KEY").into());
        }

        let endpoint = cfg.endpoint.trim();
        validate_http_endpoint("OPENAI_BASE_URL", endpoint)?;

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_key))
            .map_err(|e| EmbeddingError::Decode(format!("invalid API key header: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .build()?;

        let url_embeddings = format!("{}/v1/embeddings", endpoint.trim_end_matches('/'));

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = cfg.timeout_secs,
            "OpenAiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_embeddings,
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiService {
    fn model(&self) -> &str {
        &self.cfg.model
    }

    /// Retrieves one vector per input via `/v1/embeddings`.
    ///
    /// # Errors
    /// - [`EmbeddingError::HttpStatus`] for non-2xx responses
    /// - [`EmbeddingError::HttpTransport`] for client/network failures
    /// - [`EmbeddingError::Decode`] if the JSON cannot be parsed or the
    ///   number of vectors differs from the number of inputs
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let started = Instant::now();
        let body = EmbeddingsRequest {
            model: &self.cfg.model,
            input: texts,
        };

        debug!(
            model = %self.cfg.model,
            inputs = texts.len(),
            "POST {}", self.url_embeddings
        );

        let resp = self
            .client
            .post(&self.url_embeddings)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let url = self.url_embeddings.clone();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis(),
                "OpenAI /v1/embeddings returned non-success status"
            );

            return Err(EmbeddingError::HttpStatus {
                status,
                url,
                snippet,
            });
        }

        let out: EmbeddingsResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    error = %e,
                    model = %self.cfg.model,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode /v1/embeddings response"
                );
                return Err(EmbeddingError::Decode(format!(
                    "serde error: {e}; expected `data[].embedding`"
                )));
            }
        };

        let vectors = into_ordered_vectors(out.data, texts.len())?;

        info!(
            model = %self.cfg.model,
            count = vectors.len(),
            latency_ms = started.elapsed().as_millis(),
            "embeddings completed"
        );

        Ok(vectors)
    }
}

/// Sorts items by `index` and checks one vector came back per input.
fn into_ordered_vectors(mut items: Vec<EmbeddingItem>, expected: usize) -> Result<Vec<Vec<f32>>> {
    if items.len() != expected {
        return Err(EmbeddingError::Decode(format!(
            "expected {expected} embeddings, got {}",
            items.len()
        )));
    }
    items.sort_by_key(|item| item.index);
    Ok(items.into_iter().map(|item| item.embedding).collect())
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Request body for `/v1/embeddings`.
#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

/// Response body for `/v1/embeddings`.
#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingItem>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingItem {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}
