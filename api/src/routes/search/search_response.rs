use serde::{Deserialize, Serialize};
use vector_store::{Payload, PointKey, ScoredHit};

/// Subset of fields returned from a vector search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: PointKey,
    pub score: f32,
    /// `null` when the payload was not requested.
    pub payload: Option<Payload>,
}

impl From<ScoredHit> for SearchResult {
    fn from(hit: ScoredHit) -> Self {
        Self {
            id: hit.id,
            score: hit.score,
            payload: hit.payload,
        }
    }
}
