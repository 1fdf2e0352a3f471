use serde::Deserialize;
use validator::Validate;
use vector_store::{Payload, PointKey};

/// A single point to insert or update.
#[derive(Debug, Deserialize, Validate)]
pub struct UpsertPointRequest {
    pub collection_name: String,
    /// Unsigned integer or string identifier.
    pub point_id: PointKey,
    #[validate(length(min = 1))]
    pub vector: Vec<f32>,
    /// Optional metadata stored alongside the vector.
    #[serde(default)]
    pub payload: Option<Payload>,
}
