use serde::Deserialize;
use validator::Validate;

/// Payload used to create or recreate a collection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCollectionRequest {
    /// Collection identifier.
    #[validate(length(min = 1))]
    pub name: String,
    /// Dimensionality of vectors.
    #[validate(range(min = 1))]
    pub vector_size: u64,
    /// One of `cosine`, `dot`, `euclid`. Checked in the handler so an unknown
    /// label is a 400 rather than a body rejection.
    #[serde(default = "default_distance")]
    pub distance: String,
}

fn default_distance() -> String {
    "cosine".to_string()
}
