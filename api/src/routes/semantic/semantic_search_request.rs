use serde::Deserialize;
use validator::Validate;

/// Semantic search over a notes collection.
#[derive(Debug, Deserialize, Validate)]
pub struct SemanticSearchRequest {
    #[serde(default = "super::default_collection")]
    pub collection_name: String,
    #[validate(length(min = 1))]
    pub query: String,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 50))]
    pub limit: u64,
}

fn default_limit() -> u64 {
    5
}
