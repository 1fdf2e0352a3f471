use serde::Deserialize;
use validator::Validate;

/// Query body for vector search.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchRequest {
    pub collection_name: String,
    #[validate(length(min = 1))]
    pub vector: Vec<f32>,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u64,
    #[serde(default = "default_with_payload")]
    pub with_payload: bool,
}

fn default_limit() -> u64 {
    5
}

fn default_with_payload() -> bool {
    true
}
