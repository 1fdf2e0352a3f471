//! In-memory stand-ins for Qdrant and the embedding provider.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use api::core::{api_config::ApiConfig, app_state::AppState};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use embedding_service::{EmbeddingError, EmbeddingProvider};
use http_body_util::BodyExt;
use serde_json::Value;
use vector_store::{
    CollectionSpec, PointRecord, ScoredHit, SearchQuery, VectorStore, VectorStoreError,
};

pub const EMBEDDING_DIM: usize = 8;

/// Collections held in memory; search ranks by cosine similarity.
#[derive(Default)]
pub struct MemoryStore {
    pub collections: Mutex<HashMap<String, (CollectionSpec, Vec<PointRecord>)>>,
    pub calls: AtomicUsize,
    pub unreachable: AtomicBool,
}

impl MemoryStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn spec(&self, name: &str) -> Option<CollectionSpec> {
        self.collections
            .lock()
            .unwrap()
            .get(name)
            .map(|(spec, _)| spec.clone())
    }

    pub fn points(&self, name: &str) -> Vec<PointRecord> {
        self.collections
            .lock()
            .unwrap()
            .get(name)
            .map(|(_, points)| points.clone())
            .unwrap_or_default()
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na == 0.0 || nb == 0.0 { 0.0 } else { dot / (na * nb) }
}

#[async_trait]
impl VectorStore for MemoryStore {
    async fn recreate_collection(&self, spec: &CollectionSpec) -> Result<(), VectorStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.collections
            .lock()
            .unwrap()
            .insert(spec.name.clone(), (spec.clone(), Vec::new()));
        Ok(())
    }

    async fn upsert_points(
        &self,
        collection: &str,
        points: Vec<PointRecord>,
    ) -> Result<usize, VectorStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut map = self.collections.lock().unwrap();
        let (spec, stored) = map
            .get_mut(collection)
            .ok_or_else(|| VectorStoreError::Qdrant(format!("Collection `{collection}` doesn't exist!")))?;

        let count = points.len();
        for point in points {
            if point.vector.len() as u64 != spec.vector_size {
                return Err(VectorStoreError::Qdrant("Wrong input: Vector dimension error".into()));
            }
            stored.retain(|p| p.id != point.id);
            stored.push(point);
        }
        Ok(count)
    }

    async fn search(&self, query: SearchQuery) -> Result<Vec<ScoredHit>, VectorStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let map = self.collections.lock().unwrap();
        let (_, stored) = map.get(&query.collection).ok_or_else(|| {
            VectorStoreError::Qdrant(format!("Collection `{}` doesn't exist!", query.collection))
        })?;

        let mut hits: Vec<ScoredHit> = stored
            .iter()
            .map(|p| ScoredHit {
                id: p.id.clone(),
                score: cosine(&p.vector, &query.vector),
                payload: query.with_payload.then(|| p.payload.clone()),
            })
            .collect();
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits.truncate(query.limit as usize);
        Ok(hits)
    }

    async fn list_collections(&self) -> Result<Vec<String>, VectorStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(VectorStoreError::Qdrant("transport error: connection refused".into()));
        }
        Ok(self.collections.lock().unwrap().keys().cloned().collect())
    }
}

/// Deterministic bag-of-bytes embedding.
#[derive(Default)]
pub struct ByteEmbedder {
    pub calls: AtomicUsize,
}

impl ByteEmbedder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for ByteEmbedder {
    fn model(&self) -> &str {
        "byte-bag"
    }

    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(texts
            .iter()
            .map(|t| {
                let mut v = vec![0.0; EMBEDDING_DIM];
                for b in t.bytes() {
                    v[b as usize % EMBEDDING_DIM] += 1.0;
                }
                v
            })
            .collect())
    }
}

/// Answers every batch with no vectors at all.
#[derive(Default)]
pub struct EmptyEmbedder {
    pub calls: AtomicUsize,
}

#[async_trait]
impl EmbeddingProvider for EmptyEmbedder {
    fn model(&self) -> &str {
        "empty"
    }

    async fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

/// Fails every batch as an undecodable upstream response would.
pub struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    fn model(&self) -> &str {
        "failing"
    }

    async fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Err(EmbeddingError::Decode("missing `data` field".into()))
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub embedder: Arc<ByteEmbedder>,
}

pub fn test_app() -> TestApp {
    let store = Arc::new(MemoryStore::default());
    let embedder = Arc::new(ByteEmbedder::default());
    let state = AppState::new(store.clone(), embedder.clone());
    TestApp {
        router: api::app(state, &ApiConfig::default()),
        store,
        embedder,
    }
}

/// Router over a fresh [`MemoryStore`] and the given embedding provider.
pub fn app_with_provider(provider: Arc<dyn EmbeddingProvider>) -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState::new(store.clone(), provider);
    (api::app(state, &ApiConfig::default()), store)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
