use async_trait::async_trait;

use crate::error_handler::Result;

/// A backend that turns texts into vectors.
///
/// Output position `i` must correspond to input position `i`.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Model identifier, for logs.
    fn model(&self) -> &str;

    /// Embeds a non-empty batch in a single upstream call.
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}
