use std::sync::Arc;

use embedding_service::{EmbeddingAdapter, EmbeddingConfig, EmbeddingProvider, OpenAiService};
use vector_store::{QdrantFacade, QdrantSettings, VectorStore};

use crate::core::collection_locks::CollectionLocks;
use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
///
/// Client handles are built once and reused by every request.
#[derive(Clone)]
pub struct AppState {
    /// Vector database client.
    pub vector_store: Arc<dyn VectorStore>,
    /// Text → vector adapter.
    pub embeddings: EmbeddingAdapter,
    /// Serializes collection recreation against in-flight reads/writes.
    pub locks: CollectionLocks,
}

impl AppState {
    pub fn new(
        vector_store: Arc<dyn VectorStore>,
        embedding_provider: Arc<dyn EmbeddingProvider>,
    ) -> Self {
        Self {
            vector_store,
            embeddings: EmbeddingAdapter::new(embedding_provider),
            locks: CollectionLocks::new(),
        }
    }

    /// Build the Qdrant and OpenAI clients from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let qdrant = QdrantFacade::new(&QdrantSettings::from_env()?)?;
        let openai = OpenAiService::new(EmbeddingConfig::from_env()?)?;
        Ok(Self::new(Arc::new(qdrant), Arc::new(openai)))
    }
}
