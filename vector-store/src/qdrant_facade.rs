//! Thin adapter around `qdrant-client` to isolate API usage.
//!
//! This facade concentrates all Qdrant interactions behind the
//! [`VectorStore`] trait, hiding away the verbose builder pattern and keeping
//! the rest of the application decoupled from `qdrant-client`.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use qdrant_client::qdrant::point_id::PointIdOptions;
use qdrant_client::qdrant::{
    CreateCollectionBuilder, Distance as QDistance, PointId, PointStruct, ScoredPoint,
    SearchPointsBuilder, UpsertPointsBuilder, Value as QValue, VectorParamsBuilder,
};
use qdrant_client::{Payload as QPayload, Qdrant};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::QdrantSettings;
use crate::errors::VectorStoreError;
use crate::record::{CollectionSpec, Distance, Payload, PointKey, PointRecord, ScoredHit, SearchQuery};
use crate::store::VectorStore;

/// [`VectorStore`] backed by a single reusable Qdrant gRPC client.
pub struct QdrantFacade {
    client: Qdrant,
}

impl QdrantFacade {
    /// Builds the client from settings. Does not touch the network.
    ///
    /// # Errors
    /// Returns `VectorStoreError::Config` for invalid settings and
    /// `VectorStoreError::Qdrant` if the client cannot be constructed.
    pub fn new(settings: &QdrantSettings) -> Result<Self, VectorStoreError> {
        settings.validate()?;

        let mut builder = Qdrant::from_url(&settings.url);
        if let Some(key) = &settings.api_key {
            builder = builder.api_key(key.clone());
        }
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| VectorStoreError::Qdrant(format!("client build: {e}")))?;

        info!(
            url = %settings.url,
            has_api_key = settings.api_key.is_some(),
            "Qdrant client initialized"
        );

        Ok(Self { client })
    }
}

#[async_trait]
impl VectorStore for QdrantFacade {
    async fn recreate_collection(&self, spec: &CollectionSpec) -> Result<(), VectorStoreError> {
        info!(
            collection = %spec.name,
            size = spec.vector_size,
            distance = %spec.distance,
            "Recreating collection"
        );

        let exists = self
            .client
            .collection_exists(spec.name.as_str())
            .await
            .map_err(|e| VectorStoreError::Qdrant(format!("collection_exists: {e}")))?;

        if exists {
            warn!(collection = %spec.name, "Dropping existing collection");
            self.client
                .delete_collection(spec.name.as_str())
                .await
                .map_err(|e| VectorStoreError::Qdrant(format!("delete_collection: {e}")))?;
        }

        self.client
            .create_collection(
                CreateCollectionBuilder::new(spec.name.as_str()).vectors_config(
                    VectorParamsBuilder::new(spec.vector_size, to_qdrant_distance(spec.distance)),
                ),
            )
            .await
            .map_err(|e| VectorStoreError::Qdrant(format!("create_collection: {e}")))?;

        debug!(collection = %spec.name, "Collection created");
        Ok(())
    }

    async fn upsert_points(
        &self,
        collection: &str,
        points: Vec<PointRecord>,
    ) -> Result<usize, VectorStoreError> {
        if points.is_empty() {
            debug!(collection, "No points provided for upsert");
            return Ok(0);
        }

        let count = points.len();
        let mut structs = Vec::with_capacity(count);
        for record in points {
            structs.push(to_point_struct(record)?);
        }

        info!(collection, count, "Upserting points");

        let res = self
            .client
            .upsert_points(UpsertPointsBuilder::new(collection, structs).wait(true))
            .await
            .map_err(|e| VectorStoreError::Qdrant(format!("upsert_points: {e}")))?;

        debug!(collection, result = ?res.result, "Upsert acknowledged");
        Ok(count)
    }

    async fn search(&self, query: SearchQuery) -> Result<Vec<ScoredHit>, VectorStoreError> {
        debug!(
            collection = %query.collection,
            limit = query.limit,
            with_payload = query.with_payload,
            "Searching"
        );

        let with_payload = query.with_payload;
        let res = self
            .client
            .search_points(
                SearchPointsBuilder::new(query.collection.as_str(), query.vector, query.limit)
                    .with_payload(with_payload),
            )
            .await
            .map_err(|e| VectorStoreError::Qdrant(format!("search_points: {e}")))?;

        let hits: Vec<ScoredHit> = res
            .result
            .into_iter()
            .filter_map(|sp| scored_point_to_hit(sp, with_payload))
            .collect();

        debug!(collection = %query.collection, hits = hits.len(), "Search completed");
        Ok(hits)
    }

    async fn list_collections(&self) -> Result<Vec<String>, VectorStoreError> {
        let res = self
            .client
            .list_collections()
            .await
            .map_err(|e| VectorStoreError::Qdrant(format!("list_collections: {e}")))?;

        Ok(res.collections.into_iter().map(|c| c.name).collect())
    }
}

/// Exhaustive label-to-metric mapping; a new [`Distance`] variant fails to compile here.
pub(crate) fn to_qdrant_distance(distance: Distance) -> QDistance {
    match distance {
        Distance::Cosine => QDistance::Cosine,
        Distance::Dot => QDistance::Dot,
        Distance::Euclid => QDistance::Euclid,
    }
}

fn to_point_struct(record: PointRecord) -> Result<PointStruct, VectorStoreError> {
    let id: PointId = match record.id {
        PointKey::Num(n) => n.into(),
        PointKey::Text(s) => s.into(),
    };
    let payload = payload_to_qdrant(record.payload)?;
    Ok(PointStruct::new(id, record.vector, payload))
}

/// Serializes to JSON and converts with `try_into()` as recommended by the client.
fn payload_to_qdrant(payload: Payload) -> Result<QPayload, VectorStoreError> {
    Value::Object(payload)
        .try_into()
        .map_err(|e| VectorStoreError::Payload(format!("payload convert: {e}")))
}

pub(crate) fn point_key_from_qdrant(id: Option<PointId>) -> Option<PointKey> {
    match id?.point_id_options? {
        PointIdOptions::Num(n) => Some(PointKey::Num(n)),
        PointIdOptions::Uuid(s) => Some(PointKey::Text(s)),
    }
}

/// Converts a Qdrant payload into a JSON object, keeping nested values.
pub(crate) fn payload_from_qdrant(payload: HashMap<String, QValue>) -> Payload {
    payload
        .into_iter()
        .map(|(k, v)| (k, v.into_json()))
        .collect()
}

fn scored_point_to_hit(sp: ScoredPoint, with_payload: bool) -> Option<ScoredHit> {
    let Some(id) = point_key_from_qdrant(sp.id) else {
        warn!(score = sp.score, "Skipping hit without point id");
        return None;
    };

    Some(ScoredHit {
        id,
        score: sp.score,
        payload: with_payload.then(|| payload_from_qdrant(sp.payload)),
    })
}
