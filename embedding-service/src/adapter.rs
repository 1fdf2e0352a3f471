//! Batch embedding entry point used by the HTTP layer.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::error_handler::Result;
use crate::provider::EmbeddingProvider;

/// Shared, cheaply clonable handle over one [`EmbeddingProvider`].
#[derive(Clone)]
pub struct EmbeddingAdapter {
    provider: Arc<dyn EmbeddingProvider>,
}

impl EmbeddingAdapter {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { provider }
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Embeds `texts`, preserving order.
    ///
    /// An empty batch returns an empty result without calling the provider.
    /// Provider errors are returned unchanged; there is no retry.
    pub async fn embed_text_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let started = Instant::now();
        let vectors = self.provider.embed(texts).await?;

        debug!(
            model = %self.provider.model(),
            count = vectors.len(),
            latency_ms = started.elapsed().as_millis(),
            "embedded text batch"
        );
        Ok(vectors)
    }
}
