//! Backend-agnostic vector database operations.

use async_trait::async_trait;

use crate::errors::VectorStoreError;
use crate::record::{CollectionSpec, PointRecord, ScoredHit, SearchQuery};

/// Operations the gateway needs from a vector database.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Drops `spec.name` if it exists, then creates it with the given shape.
    /// Existing points are lost.
    async fn recreate_collection(&self, spec: &CollectionSpec) -> Result<(), VectorStoreError>;

    /// Inserts or overwrites `points` in one call. Returns the number written.
    async fn upsert_points(
        &self,
        collection: &str,
        points: Vec<PointRecord>,
    ) -> Result<usize, VectorStoreError>;

    /// Similarity search, ranked by the collection's metric.
    async fn search(&self, query: SearchQuery) -> Result<Vec<ScoredHit>, VectorStoreError>;

    /// Names of all collections. Also serves as the connectivity probe.
    async fn list_collections(&self) -> Result<Vec<String>, VectorStoreError>;
}
